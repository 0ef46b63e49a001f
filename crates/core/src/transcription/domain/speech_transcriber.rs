use thiserror::Error;

use crate::audio::domain::audio_segment::AudioSegment;

use super::transcript::Transcript;

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("transcription model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("speech recognition failed: {0}")]
    Inference(String),
}

/// Domain interface for speech-to-text with source-language detection.
pub trait SpeechTranscriber: Send {
    fn transcribe(&self, audio: &AudioSegment) -> Result<Transcript, TranscribeError>;
}
