//! Display-field derivation for an overridden link.
//!
//! Given the replacement code, recomputes the four display fields through a
//! fixed fallback chain. A resolved language name always wins over the
//! customizable messages; the messages are a fallback, never an override.

use std::sync::Arc;

use crate::host::{
    CHANNEL, DiagnosticSink, LanguageCodeNormalizer, LanguageNameProvider, MessageProvider,
    RenderContext,
};
use crate::link::TargetReference;

/// The recomputed display fields of one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFields {
    pub text: String,
    pub title: String,
    pub css_class: String,
    pub lang_tag: String,
}

pub struct LinkFieldDeriver {
    names: Arc<dyn LanguageNameProvider>,
    normalizer: Arc<dyn LanguageCodeNormalizer>,
    messages: Arc<dyn MessageProvider>,
    sink: Arc<dyn DiagnosticSink>,
}

impl LinkFieldDeriver {
    pub fn new(
        names: Arc<dyn LanguageNameProvider>,
        normalizer: Arc<dyn LanguageCodeNormalizer>,
        messages: Arc<dyn MessageProvider>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            names,
            normalizer,
            messages,
            sink,
        }
    }

    /// Recompute text, title, class and language tag for `code`.
    pub fn derive(
        &self,
        code: &str,
        target: &TargetReference,
        viewer: &RenderContext,
    ) -> DerivedFields {
        let autonym = self.names.autonym(code);
        let text = self.link_text(&format_language_name(autonym, viewer), code, target);

        // Without a localization source the provider hands back the autonym
        // again, and the title chain still holds.
        let localized = self.names.localized_name(code, &viewer.viewer_locale);
        let title = self.link_title(&localized, code, target);

        DerivedFields {
            text,
            title,
            css_class: format!("interlanguage-link interwiki-{code}"),
            lang_tag: self.normalizer.to_bcp47(code),
        }
    }

    /// Link text: language name, else the per-code custom message, else the
    /// raw page text.
    fn link_text(&self, lang_name: &str, code: &str, target: &TargetReference) -> String {
        if !lang_name.is_empty() {
            return lang_name.to_owned();
        }

        if !code.is_empty() {
            let display_text = self.messages.render(&format!("interlanguage-link-{code}"), &[]);
            if !display_text.is_disabled() {
                return display_text.text();
            }
            self.sink.log(
                CHANNEL,
                &format!("no name and no enabled message for '{code}', using page text"),
            );
        }

        // Nothing friendly to show, fall back to the link target itself.
        target.page_text.clone()
    }

    /// Tooltip title: localized-name composition, else site-name-message
    /// composition, else `interwiki:page`.
    fn link_title(&self, lang_name: &str, code: &str, target: &TargetReference) -> String {
        let page_text = target.page_text.as_str();

        if !lang_name.is_empty() {
            let title = if page_text.is_empty() {
                self.messages
                    .render("interlanguage-link-title-langonly", &[lang_name])
            } else {
                self.messages
                    .render("interlanguage-link-title", &[page_text, lang_name])
            };
            return title.text();
        }

        if !code.is_empty() {
            let site_name = self
                .messages
                .render(&format!("interlanguage-link-sitename-{code}"), &[]);
            if !site_name.is_disabled() {
                let site_name = site_name.text();
                let title = if page_text.is_empty() {
                    self.messages
                        .render("interlanguage-link-title-nonlangonly", &[&site_name])
                } else {
                    self.messages
                        .render("interlanguage-link-title-nonlang", &[page_text, &site_name])
                };
                return title.text();
            }
            self.sink.log(
                CHANNEL,
                &format!("no localized name and no site name for '{code}', using composite title"),
            );
        }

        format!("{}:{page_text}", target.interwiki)
    }
}

/// Apply the viewer locale's formatting conventions to a language name.
fn format_language_name(name: String, viewer: &RenderContext) -> String {
    if !viewer.capitalize_language_names {
        return name;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}
