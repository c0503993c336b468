//! Trigger → language tables.
//!
//! Static, process-wide, read-only. Lookup is exact-match on the raw reaction
//! symbol; several flags share a language.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Flag emoji → target language code.
pub static TRIGGER_LANGUAGES: &[(&str, &str)] = &[
    // English
    ("🇬🇧", "en"), // GB
    ("🇺🇸", "en"), // US
    ("🇨🇦", "en"), // CA
    ("🇦🇺", "en"), // AU
    ("🇳🇿", "en"), // NZ
    ("🇮🇪", "en"), // IE
    ("🇿🇦", "en"), // ZA
    ("🇧🇿", "en"), // BZ
    ("🇬🇾", "en"), // GY
    ("🇵🇬", "en"), // PG
    ("🇸🇧", "en"), // SB
    // French
    ("🇫🇷", "fr"), // FR
    ("🇧🇪", "fr"), // BE
    ("🇨🇭", "fr"), // CH
    ("🇲🇨", "fr"), // MC
    ("🇱🇺", "fr"), // LU
    ("🇨🇮", "fr"), // CI
    ("🇧🇫", "fr"), // BF
    ("🇹🇩", "fr"), // TD
    ("🇨🇲", "fr"), // CM
    ("🇨🇫", "fr"), // CF
    ("🇨🇬", "fr"), // CG
    ("🇨🇩", "fr"), // CD
    ("🇬🇦", "fr"), // GA
    ("🇬🇳", "fr"), // GN
    ("🇲🇺", "fr"), // MU
    ("🇬🇫", "fr"), // GF
    ("🇳🇨", "fr"), // NC
    ("🇵🇫", "fr"), // PF
    // Spanish
    ("🇪🇸", "es"), // ES
    ("🇲🇽", "es"), // MX
    ("🇦🇷", "es"), // AR
    ("🇨🇴", "es"), // CO
    ("🇵🇪", "es"), // PE
    ("🇻🇪", "es"), // VE
    ("🇨🇱", "es"), // CL
    ("🇪🇨", "es"), // EC
    ("🇬🇹", "es"), // GT
    ("🇨🇺", "es"), // CU
    ("🇩🇴", "es"), // DO
    ("🇭🇳", "es"), // HN
    ("🇵🇾", "es"), // PY
    ("🇳🇮", "es"), // NI
    ("🇨🇷", "es"), // CR
    ("🇵🇦", "es"), // PA
    ("🇺🇾", "es"), // UY
    ("🇧🇴", "es"), // BO
    ("🇸🇻", "es"), // SV
    // German
    ("🇩🇪", "de"), // DE
    ("🇦🇹", "de"), // AT
    ("🇱🇮", "de"), // LI
    // Other European
    ("🇮🇹", "it"), // IT
    ("🇸🇲", "it"), // SM
    ("🇵🇹", "pt"), // PT
    ("🇧🇷", "pt"), // BR
    ("🇹🇱", "pt"), // TL
    ("🇳🇱", "nl"), // NL
    ("🇸🇷", "nl"), // SR
    ("🇷🇺", "ru"), // RU
    ("🇵🇱", "pl"), // PL
    ("🇸🇪", "sv"), // SE
    ("🇳🇴", "no"), // NO
    ("🇩🇰", "da"), // DK
    ("🇫🇮", "fi"), // FI
    ("🇬🇷", "el"), // GR
    ("🇭🇺", "hu"), // HU
    ("🇨🇿", "cs"), // CZ
    ("🇸🇰", "sk"), // SK
    ("🇷🇴", "ro"), // RO
    ("🇧🇬", "bg"), // BG
    ("🇭🇷", "hr"), // HR
    ("🇸🇮", "sl"), // SI
    ("🇱🇹", "lt"), // LT
    ("🇱🇻", "lv"), // LV
    ("🇪🇪", "et"), // EE
    ("🇺🇦", "uk"), // UA
    ("🇧🇾", "be"), // BY
    ("🇷🇸", "sr"), // RS
    ("🇲🇰", "mk"), // MK
    ("🇦🇱", "sq"), // AL
    ("🇮🇸", "is"), // IS
    ("🇲🇹", "mt"), // MT
    ("🇦🇩", "ca"), // AD
    ("🇻🇦", "la"), // VA
    // Asian
    ("🇯🇵", "ja"), // JP
    ("🇰🇷", "ko"), // KR
    ("🇨🇳", "zh"), // CN
    ("🇸🇬", "zh"), // SG
    ("🇹🇼", "zh-tw"), // TW
    ("🇭🇰", "zh-tw"), // HK
    ("🇹🇭", "th"), // TH
    ("🇻🇳", "vi"), // VN
    ("🇮🇳", "hi"), // IN
    ("🇮🇩", "id"), // ID
    ("🇲🇾", "ms"), // MY
    ("🇧🇳", "ms"), // BN
    ("🇵🇭", "tl"), // PH
    ("🇱🇰", "ta"), // LK
    ("🇧🇩", "bn"), // BD
    ("🇵🇰", "ur"), // PK
    ("🇳🇵", "ne"), // NP
    ("🇲🇲", "my"), // MM
    ("🇰🇭", "km"), // KH
    ("🇱🇦", "lo"), // LA
    ("🇲🇳", "mn"), // MN
    ("🇰🇿", "kk"), // KZ
    ("🇺🇿", "uz"), // UZ
    ("🇹🇯", "tg"), // TJ
    ("🇰🇬", "ky"), // KG
    ("🇹🇲", "tk"), // TM
    ("🇦🇫", "ps"), // AF
    ("🇲🇻", "dv"), // MV
    ("🇧🇹", "dz"), // BT
    // Middle Eastern
    ("🇸🇦", "ar"), // SA
    ("🇦🇪", "ar"), // AE
    ("🇪🇬", "ar"), // EG
    ("🇯🇴", "ar"), // JO
    ("🇱🇧", "ar"), // LB
    ("🇸🇾", "ar"), // SY
    ("🇮🇶", "ar"), // IQ
    ("🇰🇼", "ar"), // KW
    ("🇶🇦", "ar"), // QA
    ("🇧🇭", "ar"), // BH
    ("🇴🇲", "ar"), // OM
    ("🇾🇪", "ar"), // YE
    ("🇲🇦", "ar"), // MA
    ("🇩🇿", "ar"), // DZ
    ("🇹🇳", "ar"), // TN
    ("🇱🇾", "ar"), // LY
    ("🇸🇩", "ar"), // SD
    ("🇮🇷", "fa"), // IR
    ("🇹🇷", "tr"), // TR
    ("🇮🇱", "he"), // IL
    ("🇦🇲", "hy"), // AM
    ("🇬🇪", "ka"), // GE
    ("🇦🇿", "az"), // AZ
    // African
    ("🇳🇬", "yo"), // NG
    ("🇰🇪", "sw"), // KE
    ("🇹🇿", "sw"), // TZ
    ("🇺🇬", "sw"), // UG
    ("🇪🇹", "am"), // ET
    ("🇿🇼", "sn"), // ZW
    ("🇿🇲", "ny"), // ZM
    ("🇲🇼", "ny"), // MW
    ("🇬🇭", "tw"), // GH
    ("🇸🇳", "wo"), // SN
    ("🇲🇱", "bm"), // ML
    ("🇳🇪", "ha"), // NE
    ("🇲🇬", "mg"), // MG
    ("🇷🇼", "rw"), // RW
    ("🇧🇮", "rn"), // BI
    // Pacific
    ("🇫🇯", "fj"), // FJ
    ("🇹🇴", "to"), // TO
    ("🇼🇸", "sm"), // WS
    ("🇻🇺", "bi"), // VU
];

/// Language code → display name.
static LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("ru", "Russian"),
    ("pl", "Polish"),
    ("sv", "Swedish"),
    ("no", "Norwegian"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("el", "Greek"),
    ("hu", "Hungarian"),
    ("cs", "Czech"),
    ("sk", "Slovak"),
    ("ro", "Romanian"),
    ("bg", "Bulgarian"),
    ("hr", "Croatian"),
    ("sl", "Slovenian"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("et", "Estonian"),
    ("uk", "Ukrainian"),
    ("be", "Belarusian"),
    ("sr", "Serbian"),
    ("mk", "Macedonian"),
    ("sq", "Albanian"),
    ("is", "Icelandic"),
    ("mt", "Maltese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("hi", "Hindi"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("tl", "Filipino"),
    ("si", "Sinhala"),
    ("bn", "Bengali"),
    ("ur", "Urdu"),
    ("ne", "Nepali"),
    ("my", "Myanmar"),
    ("km", "Khmer"),
    ("lo", "Lao"),
    ("mn", "Mongolian"),
    ("kk", "Kazakh"),
    ("uz", "Uzbek"),
    ("tg", "Tajik"),
    ("ky", "Kyrgyz"),
    ("tk", "Turkmen"),
    ("ps", "Pashto"),
    ("ar", "Arabic"),
    ("fa", "Persian"),
    ("tr", "Turkish"),
    ("he", "Hebrew"),
    ("hy", "Armenian"),
    ("ka", "Georgian"),
    ("az", "Azerbaijani"),
    ("yo", "Yoruba"),
    ("sw", "Swahili"),
    ("am", "Amharic"),
    ("sn", "Shona"),
    ("ny", "Chichewa"),
    ("tw", "Twi"),
    ("wo", "Wolof"),
    ("bm", "Bambara"),
    ("ha", "Hausa"),
    ("mg", "Malagasy"),
    ("rw", "Kinyarwanda"),
    ("rn", "Kirundi"),
    ("ca", "Catalan"),
    ("la", "Latin"),
    ("fj", "Fijian"),
    ("to", "Tongan"),
    ("sm", "Samoan"),
    ("bi", "Bislama"),
    ("dv", "Dhivehi"),
    ("dz", "Dzongkha"),
    ("ta", "Tamil"),
];

static TRIGGER_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TRIGGER_LANGUAGES.iter().copied().collect());

static NAME_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LANGUAGE_NAMES.iter().copied().collect());

/// Target language for a reaction symbol, or `None` if it is not a known flag.
pub fn language_for_trigger(trigger: &str) -> Option<&'static str> {
    TRIGGER_INDEX.get(trigger).copied()
}

/// Human-readable name for a language code. Unknown codes fall back to the
/// upper-cased code.
pub fn language_name(code: &str) -> String {
    match NAME_INDEX.get(code) {
        Some(name) => (*name).to_string(),
        None => code.to_uppercase(),
    }
}

/// Number of supported trigger symbols.
pub fn trigger_count() -> usize {
    TRIGGER_INDEX.len()
}

/// One row of the supported-language listing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LanguageEntry {
    pub emoji: &'static str,
    pub code: &'static str,
    pub name: String,
}

/// All supported triggers, sorted by display name then symbol.
pub fn supported_languages() -> Vec<LanguageEntry> {
    let mut out: Vec<LanguageEntry> = TRIGGER_LANGUAGES
        .iter()
        .map(|&(emoji, code)| LanguageEntry {
            emoji,
            code,
            name: language_name(code),
        })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.emoji.cmp(b.emoji)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_flags_resolve() {
        assert_eq!(language_for_trigger("🇪🇸"), Some("es"));
        assert_eq!(language_for_trigger("🇲🇽"), Some("es"));
        assert_eq!(language_for_trigger("🇯🇵"), Some("ja"));
        assert_eq!(language_for_trigger("🇹🇼"), Some("zh-tw"));
    }

    #[test]
    fn test_non_flag_reactions_do_not_resolve() {
        assert_eq!(language_for_trigger("👍"), None);
        assert_eq!(language_for_trigger(""), None);
        assert_eq!(language_for_trigger("es"), None);
    }

    #[test]
    fn test_every_target_has_a_display_name() {
        for (flag, code) in TRIGGER_LANGUAGES {
            assert!(
                NAME_INDEX.contains_key(code),
                "no display name for {code} (from {flag})"
            );
        }
    }

    #[test]
    fn test_triggers_are_unique() {
        assert_eq!(trigger_count(), TRIGGER_LANGUAGES.len());
    }

    #[test]
    fn test_language_name_fallback() {
        assert_eq!(language_name("es"), "Spanish");
        assert_eq!(language_name("zh-tw"), "Chinese (Traditional)");
        assert_eq!(language_name("xx"), "XX");
    }

    #[test]
    fn test_supported_languages_sorted_by_name() {
        let langs = supported_languages();
        assert_eq!(langs.len(), trigger_count());
        assert!(langs.windows(2).all(|w| w[0].name <= w[1].name));
        assert_eq!(langs[0].name, "Albanian");
    }
}
