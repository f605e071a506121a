//! Static language-name-to-code table

/// Fallback code when the detection probe is inconclusive
pub const DETECTION_FALLBACK: &str = "en";

/// Human-readable language names and their provider codes
///
/// The table is a closed set, immutable for the process lifetime. Names not
/// present pass through [`resolve`] verbatim, which lets callers supply
/// provider codes directly.
const LANGUAGE_CODES: &[(&str, &str)] = &[
    ("english", "en"),
    ("spanish", "es"),
    ("french", "fr"),
    ("german", "de"),
    ("italian", "it"),
    ("portuguese", "pt"),
    ("russian", "ru"),
    ("japanese", "ja"),
    ("korean", "ko"),
    ("mandarin", "zh-CN"),
    ("chinese", "zh-CN"),
    ("cantonese", "zh-TW"),
    ("arabic", "ar"),
    ("hindi", "hi"),
    ("bengali", "bn"),
    ("dutch", "nl"),
    ("greek", "el"),
    ("polish", "pl"),
    ("turkish", "tr"),
    ("vietnamese", "vi"),
    ("thai", "th"),
    ("swedish", "sv"),
    ("norwegian", "no"),
    ("danish", "da"),
    ("finnish", "fi"),
    ("czech", "cs"),
    ("romanian", "ro"),
    ("hungarian", "hu"),
    ("ukrainian", "uk"),
    ("hebrew", "he"),
    ("indonesian", "id"),
    ("malay", "ms"),
    ("filipino", "tl"),
    ("swahili", "sw"),
];

/// Resolve a language name to its provider code
///
/// Matching is case-insensitive on the name. Unrecognized input is returned
/// unchanged.
pub fn resolve(name: &str) -> &str {
    let needle = name.trim();
    LANGUAGE_CODES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(needle))
        .map(|(_, code)| *code)
        .unwrap_or(name)
}

/// Check whether a name is present in the table
pub fn is_known(name: &str) -> bool {
    let needle = name.trim();
    LANGUAGE_CODES.iter().any(|(n, _)| n.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_names() {
        assert_eq!(resolve("Spanish"), "es");
        assert_eq!(resolve("Mandarin"), "zh-CN");
        assert_eq!(resolve("English"), "en");
        assert_eq!(resolve("Cantonese"), "zh-TW");
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve("spanish"), "es");
        assert_eq!(resolve("FRENCH"), "fr");
        assert_eq!(resolve(" german "), "de");
    }

    #[test]
    fn test_unrecognized_names_pass_through() {
        assert_eq!(resolve("es"), "es");
        assert_eq!(resolve("zh-CN"), "zh-CN");
        assert_eq!(resolve("Klingon"), "Klingon");
    }

    #[test]
    fn test_every_table_entry_resolves_to_itself_as_code() {
        // Codes are short and never collide with the names, so feeding a
        // resolved code back through resolve() must be a no-op.
        for &(name, code) in super::LANGUAGE_CODES {
            assert_eq!(resolve(resolve(name)), code);
        }
    }

    #[test]
    fn test_is_known() {
        assert!(is_known("Japanese"));
        assert!(!is_known("ja"));
    }
}
