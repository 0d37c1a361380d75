//! Built-in language-code normalizer.
//!
//! Wiki-internal codes are not always valid BCP-47 tags: some predate the
//! registry (`simple`, `zh-min-nan`), some encode site variants
//! (`de-formal`). Normalization first swaps those for their registered
//! forms, then applies the standard per-segment casing.

use phf::{Map, phf_map};

use crate::host::LanguageCodeNormalizer;

/// Wiki codes whose BCP-47 form differs from the code itself.
static DEPRECATED_CODES: Map<&'static str, &'static str> = phf_map! {
    "als" => "gsw",
    "bat-smg" => "sgs",
    "be-x-old" => "be-tarask",
    "cbk-zam" => "cbk-x-zam",
    "de-formal" => "de-x-formal",
    "eml" => "egl",
    "en-rtl" => "en-x-rtl",
    "es-formal" => "es-x-formal",
    "fiu-vro" => "vro",
    "hu-formal" => "hu-x-formal",
    "map-bms" => "jv-x-bms",
    "mo" => "ro-Cyrl-x-mo",
    "nl-informal" => "nl-x-informal",
    "nrm" => "nrf",
    "roa-rup" => "rup",
    "roa-tara" => "nap-x-tara",
    "simple" => "en-simple",
    "sr-ec" => "sr-Cyrl",
    "sr-el" => "sr-Latn",
    "zh-classical" => "lzh",
    "zh-min-nan" => "nan",
    "zh-yue" => "yue",
};

/// The built-in [`LanguageCodeNormalizer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Bcp47;

impl Bcp47 {
    /// Normalize `code` to its BCP-47 form.
    ///
    /// Segment casing: the primary segment and anything following a
    /// private-use singleton stay lowercase, two-letter region segments go
    /// uppercase, four-letter script segments go title-case.
    pub fn normalize(code: &str) -> String {
        let lowered = code.to_ascii_lowercase();
        let code = DEPRECATED_CODES
            .get(lowered.as_str())
            .copied()
            .unwrap_or(lowered.as_str());

        let mut out = String::with_capacity(code.len());
        let mut private_use = false;
        for (seg_no, segment) in code.split('-').enumerate() {
            if seg_no > 0 {
                out.push('-');
            }
            if seg_no > 0 && !private_use && segment.len() == 2 {
                out.push_str(&segment.to_ascii_uppercase());
            } else if seg_no > 0 && !private_use && segment.len() == 4 {
                out.push_str(&title_case(segment));
            } else {
                out.push_str(&segment.to_ascii_lowercase());
            }
            private_use = segment.eq_ignore_ascii_case("x");
        }
        out
    }
}

fn title_case(segment: &str) -> String {
    let lowered = segment.to_ascii_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => lowered,
    }
}

impl LanguageCodeNormalizer for Bcp47 {
    fn to_bcp47(&self, code: &str) -> String {
        Self::normalize(code)
    }
}
