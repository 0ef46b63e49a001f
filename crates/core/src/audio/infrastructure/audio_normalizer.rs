use std::io::Write;
use std::path::PathBuf;

use crate::audio::domain::audio_decoder::{AudioDecoder, DecodeError};
use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::uploaded_audio::UploadedAudio;
use crate::shared::constants::WHISPER_SAMPLE_RATE;

/// Turns an uploaded audio payload into the canonical waveform the
/// transcriber consumes (mono f32 PCM at 16 kHz).
///
/// The payload is staged in a uniquely named temporary file carrying the
/// upload's extension hint so the decoder can probe the container. The
/// temporary file is removed on every exit path; deletion failures are
/// swallowed and never mask the decode result.
pub struct AudioNormalizer {
    decoder: Box<dyn AudioDecoder>,
    staging_dir: Option<PathBuf>,
}

impl AudioNormalizer {
    pub fn new(decoder: Box<dyn AudioDecoder>) -> Self {
        Self {
            decoder,
            staging_dir: None,
        }
    }

    /// Stage temporary files in `dir` instead of the system temp directory.
    pub fn with_staging_dir(decoder: Box<dyn AudioDecoder>, dir: PathBuf) -> Self {
        Self {
            decoder,
            staging_dir: Some(dir),
        }
    }

    pub fn normalize(&self, upload: &UploadedAudio) -> Result<AudioSegment, DecodeError> {
        let suffix = upload
            .extension_hint()
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();

        let mut builder = tempfile::Builder::new();
        builder.prefix("voicescribe-").suffix(&suffix);

        let mut staged = match &self.staging_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(DecodeError::Stage)?;

        staged.write_all(upload.bytes()).map_err(DecodeError::Stage)?;
        staged.flush().map_err(DecodeError::Stage)?;

        // `staged` is dropped when this returns, success or failure, so the
        // temporary file never outlives the call.
        self.decoder.decode(staged.path(), WHISPER_SAMPLE_RATE)
    }
}
