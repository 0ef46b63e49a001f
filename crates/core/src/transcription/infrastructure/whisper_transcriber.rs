use std::sync::Arc;

use whisper_rs::{FullParams, SamplingStrategy};

use crate::audio::domain::audio_segment::AudioSegment;
use crate::transcription::domain::speech_transcriber::{SpeechTranscriber, TranscribeError};
use crate::transcription::domain::transcript::Transcript;

use super::model_provider::WhisperModelProvider;

/// Speech transcriber using whisper.cpp via whisper-rs.
///
/// Runs the provider's cached model with automatic source-language
/// detection; decoding stays at full precision for compatibility.
pub struct WhisperTranscriber {
    provider: Arc<WhisperModelProvider>,
}

impl WhisperTranscriber {
    pub fn new(provider: Arc<WhisperModelProvider>) -> Self {
        Self { provider }
    }
}

impl SpeechTranscriber for WhisperTranscriber {
    fn transcribe(&self, audio: &AudioSegment) -> Result<Transcript, TranscribeError> {
        let context = self
            .provider
            .context()
            .map_err(|e| TranscribeError::ModelUnavailable(e.to_string()))?;

        let mut state = context
            .create_state()
            .map_err(|e| TranscribeError::Inference(format!("failed to create state: {e}")))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_language(Some("auto"));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        state
            .full(params, audio.samples())
            .map_err(|e| TranscribeError::Inference(format!("whisper inference failed: {e}")))?;

        let mut text = String::new();
        for idx in 0..state.full_n_segments() {
            let Some(segment) = state.get_segment(idx) else {
                continue;
            };
            if let Ok(segment_text) = segment.to_str_lossy() {
                text.push_str(&segment_text);
            }
        }

        let language = whisper_rs::get_lang_str(state.full_lang_id_from_state())
            .unwrap_or("en")
            .to_string();

        Ok(Transcript {
            text: text.trim().to_string(),
            language,
        })
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{WHISPER_MODEL_NAME, WHISPER_MODEL_URL, WHISPER_SAMPLE_RATE};
    use crate::shared::model_resolver;

    fn silence(seconds: f64) -> AudioSegment {
        let len = (seconds * WHISPER_SAMPLE_RATE as f64) as usize;
        AudioSegment::new(vec![0.0; len], WHISPER_SAMPLE_RATE, 1)
    }

    #[test]
    #[ignore] // Requires the whisper model file (downloads on first run)
    fn test_silence_yields_empty_or_trivial_text() {
        let model_path =
            model_resolver::resolve(WHISPER_MODEL_NAME, WHISPER_MODEL_URL, None, None)
                .expect("failed to resolve whisper model");
        let provider = Arc::new(WhisperModelProvider::with_model_path(model_path));
        let transcriber = WhisperTranscriber::new(provider);

        let transcript = transcriber.transcribe(&silence(3.0)).unwrap();
        assert!(!transcript.language.is_empty());
    }
}
