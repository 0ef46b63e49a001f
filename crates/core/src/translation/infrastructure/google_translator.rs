use std::time::Duration;

use crate::shared::language::find_language_code;
use crate::translation::domain::translator::{TranslateError, Translator};

const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Translator backed by the free Google Translate web endpoint.
///
/// The service detects the source language itself; the target may be a
/// language name or a two-letter code. An unknown target is an error
/// rather than a silent substitution.
pub struct GoogleTranslator {
    client: reqwest::blocking::Client,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError> {
        let target_code = find_language_code(target_language)
            .ok_or_else(|| TranslateError::UnsupportedLanguage(target_language.to_string()))?;

        let response = self
            .client
            .get(TRANSLATE_ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", "auto"),
                ("tl", target_code.as_str()),
                ("q", text),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| TranslateError::Transport(e.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .map_err(|e| TranslateError::Response(e.to_string()))?;
        parse_translation(&body)
    }
}

/// The endpoint answers with nested arrays: the first element is a list of
/// sentence entries whose first element is the translated fragment.
fn parse_translation(body: &serde_json::Value) -> Result<String, TranslateError> {
    let sentences = body
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslateError::Response("missing sentence list".to_string()))?;

    let mut translated = String::new();
    for sentence in sentences {
        if let Some(fragment) = sentence.get(0).and_then(|v| v.as_str()) {
            translated.push_str(fragment);
        }
    }

    if translated.is_empty() {
        return Err(TranslateError::Response(
            "no translated text in response".to_string(),
        ));
    }
    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_single_sentence() {
        let body = json!([[["Bonjour", "Hello", null, null]], null, "en"]);
        assert_eq!(parse_translation(&body).unwrap(), "Bonjour");
    }

    #[test]
    fn test_parse_concatenates_sentence_fragments() {
        let body = json!([
            [
                ["Bonjour. ", "Hello. ", null],
                ["Comment allez-vous?", "How are you?", null]
            ],
            null,
            "en"
        ]);
        assert_eq!(
            parse_translation(&body).unwrap(),
            "Bonjour. Comment allez-vous?"
        );
    }

    #[test]
    fn test_parse_rejects_unexpected_shape() {
        assert!(parse_translation(&json!({"error": 400})).is_err());
        assert!(parse_translation(&json!([])).is_err());
        assert!(parse_translation(&json!([[]])).is_err());
    }

    #[test]
    fn test_unknown_target_language_is_an_error() {
        // Fails before any request is made; nothing gets translated into
        // English behind the caller's back.
        let translator = GoogleTranslator::new();
        let err = translator.translate("hello", "klingon").unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedLanguage(_)));
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    #[ignore] // Requires network access to the translation service
    fn test_translate_hello_to_french() {
        let translator = GoogleTranslator::new();
        let translated = translator.translate("hello", "french").unwrap();
        assert!(
            translated.to_lowercase().contains("bonjour"),
            "unexpected translation: {translated}"
        );
    }
}
