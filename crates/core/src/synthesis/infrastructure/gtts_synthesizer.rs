use std::time::Duration;

use crate::shared::language::resolve_language_code;
use crate::synthesis::domain::speech_synthesizer::{
    SpeechArtifact, SpeechSynthesizer, SynthesisError,
};

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The service rejects long inputs; text is split on whitespace into chunks
/// of at most this many characters and the MP3 payloads concatenated.
const MAX_CHUNK_CHARS: usize = 100;

/// Text-to-speech via the Google Translate TTS endpoint.
///
/// Produces standard-rate MP3 audio. The language name is resolved to a
/// service code first, falling back to English for unknown names.
pub struct GttsSynthesizer {
    client: reqwest::blocking::Client,
}

impl GttsSynthesizer {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    fn fetch_chunk(&self, chunk: &str, language_code: &str) -> Result<Vec<u8>, SynthesisError> {
        let response = self
            .client
            .get(TTS_ENDPOINT)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("ttsspeed", "1"),
                ("tl", language_code),
                ("q", chunk),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| SynthesisError::Transport(e.to_string()))?;

        let bytes = response
            .bytes()
            .map_err(|e| SynthesisError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl Default for GttsSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechSynthesizer for GttsSynthesizer {
    fn synthesize(
        &self,
        text: &str,
        language_name: &str,
    ) -> Result<SpeechArtifact, SynthesisError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let code = resolve_language_code(language_name);

        let mut audio = Vec::new();
        for chunk in split_into_chunks(text, MAX_CHUNK_CHARS) {
            audio.extend_from_slice(&self.fetch_chunk(&chunk, &code)?);
        }

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }
        Ok(SpeechArtifact::from_mp3(audio))
    }
}

/// Split on whitespace into chunks of at most `max_chars` characters.
/// A single overlong word becomes its own chunk rather than being dropped.
fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        // +1 for the joining space
        if current_chars > 0 && current_chars + 1 + word_chars > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if current_chars > 0 {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_rejected() {
        let synthesizer = GttsSynthesizer::new();
        let result = synthesizer.synthesize("   ", "english");
        assert!(matches!(result, Err(SynthesisError::EmptyText)));
    }

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(split_into_chunks("hello world", 100), vec!["hello world"]);
    }

    #[test]
    fn test_chunks_respect_limit_and_keep_all_words() {
        let text = "one two three four five six seven eight nine ten";
        let chunks = split_into_chunks(text, 15);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 15, "chunk too long: {chunk}");
        }
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn test_overlong_word_becomes_own_chunk() {
        let chunks = split_into_chunks("hi incomprehensibilities yes", 10);
        assert!(chunks.contains(&"incomprehensibilities".to_string()));
        assert_eq!(chunks.join(" "), "hi incomprehensibilities yes");
    }

    #[test]
    fn test_no_chunks_for_whitespace() {
        assert!(split_into_chunks("   ", 10).is_empty());
    }

    #[test]
    #[ignore] // Requires network access to the speech service
    fn test_synthesize_produces_mp3_bytes() {
        let synthesizer = GttsSynthesizer::new();
        let artifact = synthesizer.synthesize("hello", "english").unwrap();
        assert!(!artifact.audio_bytes.is_empty());
        assert!(artifact.audio_html.contains("base64"));
    }
}
