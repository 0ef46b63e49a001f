/// Recognized text plus the source-language tag the model inferred.
///
/// Empty text is a legitimate outcome for silent or unintelligible audio;
/// a non-empty text always carries a non-empty language tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub language: String,
}

impl Transcript {
    /// True when the recognizer produced no usable text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
