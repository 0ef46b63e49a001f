use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("nothing to synthesize: text is empty")]
    EmptyText,
    #[error("speech service unreachable: {0}")]
    Transport(String),
    #[error("speech service returned no audio")]
    EmptyAudio,
}

/// A synthesized speech clip: raw MP3 bytes plus an HTML `<audio>` element
/// that plays the same bytes inline, without a separate file fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechArtifact {
    pub audio_bytes: Vec<u8>,
    pub audio_html: String,
}

impl SpeechArtifact {
    /// Wrap raw MP3 bytes together with an inline data-URI player.
    pub fn from_mp3(audio_bytes: Vec<u8>) -> Self {
        let encoded =
            base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &audio_bytes);
        let audio_html = format!(
            r#"<audio controls><source src="data:audio/mp3;base64,{encoded}" type="audio/mp3"></audio>"#
        );
        Self {
            audio_bytes,
            audio_html,
        }
    }
}

/// Domain interface for text-to-speech synthesis.
///
/// `language_name` may be a language name or a two-letter code; unknown
/// values degrade to English rather than failing.
pub trait SpeechSynthesizer: Send {
    fn synthesize(&self, text: &str, language_name: &str)
        -> Result<SpeechArtifact, SynthesisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mp3_keeps_raw_bytes() {
        let artifact = SpeechArtifact::from_mp3(vec![0xFF, 0xFB, 0x90]);
        assert_eq!(artifact.audio_bytes, vec![0xFF, 0xFB, 0x90]);
    }

    #[test]
    fn test_from_mp3_embeds_base64_data_uri() {
        let artifact = SpeechArtifact::from_mp3(b"abc".to_vec());
        assert!(artifact.audio_html.starts_with("<audio controls>"));
        assert!(artifact.audio_html.contains("data:audio/mp3;base64,YWJj"));
        assert!(artifact.audio_html.ends_with("</audio>"));
    }
}
