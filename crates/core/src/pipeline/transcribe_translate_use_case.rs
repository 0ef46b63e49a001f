use thiserror::Error;

use crate::audio::domain::audio_decoder::DecodeError;
use crate::audio::domain::uploaded_audio::UploadedAudio;
use crate::audio::infrastructure::audio_normalizer::AudioNormalizer;
use crate::shared::constants::ORIGINAL_LANGUAGE;
use crate::synthesis::domain::speech_synthesizer::SpeechSynthesizer;
use crate::transcription::domain::speech_transcriber::{SpeechTranscriber, TranscribeError};
use crate::translation::domain::translator::Translator;

use super::pipeline_result::{PipelineResult, StageOutcome, Translation};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("audio decoding failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("transcription failed: {0}")]
    Transcribe(#[from] TranscribeError),
}

/// Orchestrates one pipeline invocation: normalize, transcribe, then the
/// optional synthesis and translation stages.
///
/// Normalization and transcription failures abort the run. Failures in the
/// optional stages are absorbed into the corresponding `StageOutcome` and
/// logged; they never invalidate results already computed.
pub struct TranscribeTranslateUseCase {
    normalizer: AudioNormalizer,
    transcriber: Box<dyn SpeechTranscriber>,
    translator: Box<dyn Translator>,
    synthesizer: Box<dyn SpeechSynthesizer>,
}

impl TranscribeTranslateUseCase {
    pub fn new(
        normalizer: AudioNormalizer,
        transcriber: Box<dyn SpeechTranscriber>,
        translator: Box<dyn Translator>,
        synthesizer: Box<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            normalizer,
            transcriber,
            translator,
            synthesizer,
        }
    }

    /// Run the pipeline on one upload. `target_language` is a language name
    /// or code; `"original"` means "keep original, do not translate".
    pub fn run(
        &self,
        upload: &UploadedAudio,
        target_language: &str,
    ) -> Result<PipelineResult, PipelineError> {
        let audio = self.normalizer.normalize(upload)?;
        let transcript = self.transcriber.transcribe(&audio)?;

        let mut result = PipelineResult {
            original: transcript.text.clone(),
            detected_language: transcript.language.clone(),
            original_speech: StageOutcome::Skipped,
            translation: StageOutcome::Skipped,
            translated_speech: StageOutcome::Skipped,
        };

        // Silent or unintelligible audio: nothing to speak or translate.
        if transcript.is_empty() {
            return Ok(result);
        }

        // Speak the original in the language the recognizer detected.
        result.original_speech =
            match self.synthesizer.synthesize(&transcript.text, &transcript.language) {
                Ok(artifact) => StageOutcome::Produced(artifact),
                Err(e) => {
                    log::warn!("original speech synthesis failed: {e}");
                    StageOutcome::Failed(e.to_string())
                }
            };

        if target_language != ORIGINAL_LANGUAGE {
            match self.translator.translate(&transcript.text, target_language) {
                Ok(translated) => {
                    result.translated_speech =
                        match self.synthesizer.synthesize(&translated, target_language) {
                            Ok(artifact) => StageOutcome::Produced(artifact),
                            Err(e) => {
                                log::warn!("translated speech synthesis failed: {e}");
                                StageOutcome::Failed(e.to_string())
                            }
                        };
                    result.translation = StageOutcome::Produced(Translation {
                        text: translated,
                        target_language: target_language.to_string(),
                    });
                }
                Err(e) => {
                    log::warn!("translation to '{target_language}' failed: {e}");
                    result.translation = StageOutcome::Failed(e.to_string());
                }
            }
        }

        Ok(result)
    }
}
