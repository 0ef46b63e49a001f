use crate::synthesis::domain::speech_synthesizer::SpeechArtifact;

/// Result of one optional pipeline stage.
///
/// Distinguishes "never ran" from "ran and failed" so callers can tell an
/// absent artifact apart from an error.
#[derive(Clone, Debug, PartialEq)]
pub enum StageOutcome<T> {
    /// The stage was not requested, or its prerequisite never materialized.
    Skipped,
    Produced(T),
    /// The stage ran and failed; the rest of the pipeline carried on.
    Failed(String),
}

impl<T> StageOutcome<T> {
    pub fn produced(&self) -> Option<&T> {
        match self {
            StageOutcome::Produced(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            StageOutcome::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, StageOutcome::Skipped)
    }
}

/// Translated text plus the target-language identifier actually used.
#[derive(Clone, Debug, PartialEq)]
pub struct Translation {
    pub text: String,
    pub target_language: String,
}

/// Everything one pipeline invocation produced.
///
/// `original` is always present (possibly empty for silent audio); the
/// remaining fields describe the optional stages.
#[derive(Clone, Debug)]
pub struct PipelineResult {
    /// Recognized text; empty when the audio held no intelligible speech.
    pub original: String,
    /// Language tag the recognizer inferred for the source audio.
    pub detected_language: String,
    pub original_speech: StageOutcome<SpeechArtifact>,
    pub translation: StageOutcome<Translation>,
    pub translated_speech: StageOutcome<SpeechArtifact>,
}
