use std::path::Path;

use crate::audio::domain::audio_decoder::{AudioDecoder, DecodeError};
use crate::audio::domain::audio_segment::AudioSegment;

/// Decodes any supported audio container/codec to mono f32 PCM using
/// ffmpeg-next, resampling to the requested rate in the same pass.
pub struct FfmpegDecoder;

impl AudioDecoder for FfmpegDecoder {
    fn decode(&self, path: &Path, target_sample_rate: u32) -> Result<AudioSegment, DecodeError> {
        let codec_err = |source| DecodeError::Codec {
            path: path.to_path_buf(),
            source,
        };

        ffmpeg_next::init().map_err(codec_err)?;

        let mut ictx = ffmpeg_next::format::input(path).map_err(codec_err)?;

        let audio_stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Audio)
            .ok_or_else(|| DecodeError::NoAudioStream {
                path: path.to_path_buf(),
            })?;
        let audio_stream_index = audio_stream.index();
        let codec_params = audio_stream.parameters();

        let codec_ctx =
            ffmpeg_next::codec::context::Context::from_parameters(codec_params).map_err(codec_err)?;
        let mut decoder = codec_ctx.decoder().audio().map_err(codec_err)?;

        let mut resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Planar),
            ffmpeg_next::ChannelLayout::MONO,
            target_sample_rate,
        )
        .map_err(codec_err)?;

        let mut all_samples: Vec<f32> = Vec::new();
        let mut decoded_frame = ffmpeg_next::util::frame::audio::Audio::empty();
        let mut resampled_frame = ffmpeg_next::util::frame::audio::Audio::empty();

        for (stream, packet) in ictx.packets() {
            if stream.index() != audio_stream_index {
                continue;
            }

            decoder.send_packet(&packet).map_err(codec_err)?;

            while decoder.receive_frame(&mut decoded_frame).is_ok() {
                resampler
                    .run(&decoded_frame, &mut resampled_frame)
                    .map_err(codec_err)?;
                extract_f32_samples(&resampled_frame, &mut all_samples);
            }
        }

        // Flush the decoder
        decoder.send_eof().map_err(codec_err)?;
        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            resampler
                .run(&decoded_frame, &mut resampled_frame)
                .map_err(codec_err)?;
            extract_f32_samples(&resampled_frame, &mut all_samples);
        }

        // Flush the resampler (may have buffered samples)
        if let Ok(Some(delay)) = resampler.flush(&mut resampled_frame) {
            if delay.output > 0 {
                extract_f32_samples(&resampled_frame, &mut all_samples);
            }
        }

        Ok(AudioSegment::new(all_samples, target_sample_rate, 1))
    }
}

/// Extract f32 samples from a planar mono resampled frame.
fn extract_f32_samples(frame: &ffmpeg_next::util::frame::audio::Audio, out: &mut Vec<f32>) {
    let num_samples = frame.samples();
    if num_samples == 0 {
        return;
    }
    let data = frame.data(0);
    let floats = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, num_samples) };
    out.extend_from_slice(floats);
}
