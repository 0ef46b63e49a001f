pub mod audio_decoder;
pub mod audio_segment;
pub mod uploaded_audio;
