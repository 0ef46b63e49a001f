//! Language name to ISO-639-1-style code mapping for the speech service.

/// Language names the pipeline offers as translation targets, paired with
/// the code the speech service expects. `iw` (Hebrew) and `jw` (Javanese)
/// are the legacy identifiers the service still uses.
const LANGUAGE_CODES: &[(&str, &str)] = &[
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("arabic", "ar"),
    ("bengali", "bn"),
    ("bosnian", "bs"),
    ("catalan", "ca"),
    ("chinese", "zh"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("estonian", "et"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("german", "de"),
    ("greek", "el"),
    ("gujarati", "gu"),
    ("hebrew", "iw"),
    ("hindi", "hi"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("indonesian", "id"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("javanese", "jw"),
    ("khmer", "km"),
    ("korean", "ko"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("malayalam", "ml"),
    ("marathi", "mr"),
    ("myanmar", "my"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("serbian", "sr"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("spanish", "es"),
    ("sundanese", "su"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tamil", "ta"),
    ("telugu", "te"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("vietnamese", "vi"),
];

/// Look up a language name's two-letter service code.
///
/// Two-character input is trusted as a code and passed through unchanged;
/// anything else must match the table exactly.
pub fn find_language_code(name: &str) -> Option<String> {
    let name = name.trim().to_lowercase();

    if name.chars().count() == 2 {
        return Some(name);
    }

    LANGUAGE_CODES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| (*code).to_string())
}

/// Resolve a language name to a two-letter service code, degrading to
/// English with a warning when the name is unknown; this never fails.
pub fn resolve_language_code(name: &str) -> String {
    match find_language_code(name) {
        Some(code) => code,
        None => {
            log::warn!(
                "language '{}' not supported, falling back to English",
                name.trim()
            );
            "en".to_string()
        }
    }
}

/// Language names available as translation targets.
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGE_CODES.iter().map(|(name, _)| *name)
}
