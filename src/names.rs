pub mod data;

use std::collections::HashMap;

use crate::host::LanguageNameProvider;
use self::data::LANGUAGE_TABLE;

/// One entry of the built-in language-name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageName {
    pub code: &'static str,
    pub autonym: &'static str,
}

impl LanguageName {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline(always)]
    pub const fn autonym(&self) -> &'static str {
        self.autonym
    }
}

/// Built-in [`LanguageNameProvider`] backed by the static autonym table.
///
/// Localized names come only from entries layered on by the host; without
/// one the lookup degrades to the autonym, so viewers see the language's own
/// name rather than nothing.
#[derive(Debug, Default, Clone)]
pub struct StaticNames {
    localized: HashMap<(String, String), String>,
}

impl StaticNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer a localized name for `code` as seen by `viewer_locale`.
    pub fn with_localized(
        mut self,
        code: impl Into<String>,
        viewer_locale: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.localized
            .insert((code.into(), viewer_locale.into()), name.into());
        self
    }
}

impl LanguageNameProvider for StaticNames {
    fn autonym(&self, code: &str) -> String {
        LANGUAGE_TABLE
            .get(code)
            .map(|entry| entry.autonym.to_owned())
            .unwrap_or_default()
    }

    fn localized_name(&self, code: &str, viewer_locale: &str) -> String {
        if let Some(name) = self
            .localized
            .get(&(code.to_owned(), viewer_locale.to_owned()))
        {
            return name.clone();
        }
        self.autonym(code)
    }
}
