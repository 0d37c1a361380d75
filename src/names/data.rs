use super::LanguageName;

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates constants and the lookup table from a single list
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($( $konst:ident, $code:literal, $autonym:literal ),* $(,)?) => {
        // Public `LanguageName` constants
        $(
            pub const $konst: LanguageName = LanguageName { code: $code, autonym: $autonym };
        )*

        // Global lookup table, keyed by wiki language code
        pub static LANGUAGE_TABLE: Map<&'static str, LanguageName> = phf_map! {
            $(
                $code => LanguageName { code: $code, autonym: $autonym },
            )*
        };

        pub static ALL_LANGUAGES: &[LanguageName] = &[ $( $konst ),* ];
    };
}

define_languages! {
    ARA, "ar", "العربية",
    BUL, "bg", "български",
    CAT, "ca", "català",
    CES, "cs", "čeština",
    DAN, "da", "dansk",
    DEU, "de", "Deutsch",
    ELL, "el", "Ελληνικά",
    ENG, "en", "English",
    EPO, "eo", "Esperanto",
    EST, "et", "eesti",
    EUS, "eu", "euskara",
    FAS, "fa", "فارسی",
    FIN, "fi", "suomi",
    FRA, "fr", "français",
    HEB, "he", "עברית",
    HRV, "hr", "hrvatski",
    HUN, "hu", "magyar",
    IND, "id", "Bahasa Indonesia",
    ISL, "is", "íslenska",
    ITA, "it", "italiano",
    JPN, "ja", "日本語",
    KOR, "ko", "한국어",
    LAV, "lv", "latviešu",
    LIT, "lt", "lietuvių",
    NLD, "nl", "Nederlands",
    NNO, "nn", "norsk nynorsk",
    NOB, "nb", "norsk bokmål",
    NOR, "no", "norsk bokmål",
    POL, "pl", "polski",
    POR, "pt", "português",
    RON, "ro", "română",
    RUS, "ru", "русский",
    SLK, "sk", "slovenčina",
    SLV, "sl", "slovenščina",
    SPA, "es", "español",
    SRP, "sr", "српски / srpski",
    SWE, "sv", "svenska",
    THA, "th", "ไทย",
    TUR, "tr", "Türkçe",
    UKR, "uk", "українська",
    VIE, "vi", "Tiếng Việt",
    YUE, "yue", "粵語",
    ZHO, "zh", "中文",
}
