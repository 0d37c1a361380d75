// src/message.rs

use std::collections::HashMap;

use crate::host::{MessageProvider, RenderedMessage};

/// Default English forms of the title-composition keys. `$1` is the page
/// text, `$2` the language or site name.
const DEFAULTS: &[(&str, &str)] = &[
    ("interlanguage-link-title", "$1 – $2"),
    ("interlanguage-link-title-langonly", "$1"),
    ("interlanguage-link-title-nonlang", "$1 – $2"),
    ("interlanguage-link-title-nonlangonly", "$1"),
];

/// Built-in [`MessageProvider`]: a flat key → text map.
///
/// Hosts layer their customizable keys (`interlanguage-link-<code>`,
/// `interlanguage-link-sitename-<code>`) on top of the defaults; storing
/// `-` under a key disables it.
#[derive(Debug, Default, Clone)]
pub struct MessageStore {
    messages: HashMap<String, String>,
}

impl MessageStore {
    /// Store carrying the built-in defaults.
    pub fn with_defaults() -> Self {
        let mut store = Self::empty();
        for (key, text) in DEFAULTS {
            store.messages.insert((*key).to_owned(), (*text).to_owned());
        }
        store
    }

    /// Store with no messages at all. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Layer one message on top of the store.
    pub fn with_message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(key.into(), text.into());
        self
    }
}

impl MessageProvider for MessageStore {
    fn render(&self, key: &str, args: &[&str]) -> RenderedMessage {
        let body = self
            .messages
            .get(key)
            .map(|template| substitute(template, args));
        RenderedMessage::new(key, body)
    }
}

/// Replace `$1`…`$9` with positional arguments. Placeholders without a
/// matching argument stay as written.
fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$'
            && let Some(digit) = chars.peek().copied().filter(char::is_ascii_digit)
        {
            chars.next();
            let index = digit as usize - '0' as usize;
            match index.checked_sub(1).and_then(|i| args.get(i)) {
                Some(arg) => out.push_str(arg),
                None => {
                    out.push('$');
                    out.push(digit);
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
