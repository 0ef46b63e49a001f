use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("unsupported target language: {0}")]
    UnsupportedLanguage(String),
    #[error("translation service unreachable: {0}")]
    Transport(String),
    #[error("unexpected translation response: {0}")]
    Response(String),
}

/// Domain interface for text translation.
///
/// The source language is always auto-detected by the implementation;
/// callers only name the target.
pub trait Translator: Send {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError>;
}
