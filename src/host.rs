//! Capability seams toward the hosting wiki engine.
//!
//! Everything the override engine needs from its host comes in through one
//! of these traits, so tests (and unusual hosts) can substitute fakes. The
//! built-in implementations live in [`crate::bcp47`], [`crate::names`] and
//! [`crate::message`]. Site storage belongs to the host, so the only
//! registry shipped here is [`EmptyRegistry`], which knows no sites.

/// Diagnostic channel name used for everything this crate logs.
pub const CHANNEL: &str = "langover";

/// A site record as known to the host's site registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteRecord {
    group: Option<String>,
}

impl SiteRecord {
    pub fn new(group: Option<String>) -> Self {
        Self { group }
    }

    /// Group classification of the site, if the registry carries one.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

/// Lookup into the host's site registry, keyed by interwiki prefix or
/// database name.
pub trait SiteRegistry: Send + Sync {
    fn lookup(&self, identifier: &str) -> Option<SiteRecord>;
}

/// Registry that knows no sites. Every resolution falls back to the
/// configured default group.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyRegistry;

impl SiteRegistry for EmptyRegistry {
    fn lookup(&self, _identifier: &str) -> Option<SiteRecord> {
        None
    }
}

/// Language-name lookups.
pub trait LanguageNameProvider: Send + Sync {
    /// The language's name written in itself. Empty string when unknown.
    fn autonym(&self, code: &str) -> String;

    /// The language's name in the viewer's language. Empty string when
    /// unknown. Hosts without localization data degrade to the autonym.
    fn localized_name(&self, code: &str, viewer_locale: &str) -> String {
        let _ = viewer_locale;
        self.autonym(code)
    }
}

/// Turns a wiki-internal language code into its BCP-47 form.
pub trait LanguageCodeNormalizer: Send + Sync {
    fn to_bcp47(&self, code: &str) -> String;
}

/// A message lookup result. The message either exists with a stored text or
/// is missing; a stored text of `-` means the key was explicitly disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    key: String,
    body: Option<String>,
}

impl RenderedMessage {
    pub fn new(key: impl Into<String>, body: Option<String>) -> Self {
        Self {
            key: key.into(),
            body,
        }
    }

    pub fn exists(&self) -> bool {
        self.body.is_some()
    }

    /// Missing, blank and `-` all count as disabled.
    pub fn is_disabled(&self) -> bool {
        match &self.body {
            None => true,
            Some(body) => body.is_empty() || body == "-",
        }
    }

    /// Rendered text. Missing keys render as `⧼key⧽` so a configuration
    /// hole is visible instead of silently blank.
    pub fn text(&self) -> String {
        match &self.body {
            Some(body) => body.clone(),
            None => format!("⧼{}⧽", self.key),
        }
    }
}

/// Message store lookups with positional `$1`/`$2` parameters.
pub trait MessageProvider: Send + Sync {
    fn render(&self, key: &str, args: &[&str]) -> RenderedMessage;
}

/// Fire-and-forget diagnostics. Never affects control flow.
pub trait DiagnosticSink: Send + Sync {
    fn log(&self, channel: &str, message: &str);
}

/// Default sink: forwards to the `log` facade, channel as target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn log(&self, channel: &str, message: &str) {
        log::debug!(target: channel, "{message}");
    }
}

/// Viewer-side state of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Language code of the viewer, passed to localized-name lookups.
    pub viewer_locale: String,
    /// Uppercase the first character of language names, for viewer locales
    /// whose conventions capitalize them.
    pub capitalize_language_names: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new("en")
    }
}

impl RenderContext {
    pub fn new(viewer_locale: impl Into<String>) -> Self {
        Self {
            viewer_locale: viewer_locale.into(),
            capitalize_language_names: false,
        }
    }

    pub fn capitalize_language_names(mut self, capitalize: bool) -> Self {
        self.capitalize_language_names = capitalize;
        self
    }
}
