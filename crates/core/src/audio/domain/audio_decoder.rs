use std::path::{Path, PathBuf};

use thiserror::Error;

use super::audio_segment::AudioSegment;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to stage upload in a temporary file: {0}")]
    Stage(#[source] std::io::Error),
    #[error("no audio stream in {path}")]
    NoAudioStream { path: PathBuf },
    #[error("could not decode {path} as audio: {source}")]
    Codec {
        path: PathBuf,
        #[source]
        source: ffmpeg_next::Error,
    },
}

/// Domain interface for decoding an audio file into canonical PCM.
///
/// Implementations must deliver mono samples at the requested rate
/// regardless of the container or codec of the input.
pub trait AudioDecoder: Send {
    fn decode(&self, path: &Path, target_sample_rate: u32) -> Result<AudioSegment, DecodeError>;
}
