pub mod execution;
pub mod model_provider;
pub mod whisper_transcriber;
