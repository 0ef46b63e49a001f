//! Audio transcription, translation, and speech synthesis pipeline.
//!
//! An uploaded audio file is normalized to canonical PCM, transcribed with
//! automatic language detection, optionally translated to a target language,
//! and optionally re-spoken as MP3 audio for both the original and the
//! translated text. Each bounded context exposes domain traits and ships an
//! infrastructure implementation; `pipeline` wires them together.

pub mod audio;
pub mod pipeline;
pub mod shared;
pub mod synthesis;
pub mod transcription;
pub mod translation;
