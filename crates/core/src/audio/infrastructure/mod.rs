pub mod audio_normalizer;
pub mod ffmpeg_decoder;
