pub mod speech_transcriber;
pub mod transcript;
