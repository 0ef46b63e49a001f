pub const WHISPER_MODEL_NAME: &str = "ggml-tiny.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-tiny.bin";

/// Sample rate of the canonical waveform the transcriber consumes.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

/// Upload formats the normalizer accepts.
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "wav", "mp3", "m4a", "aac", "ogg", "wma", "flac", "alac", "aiff", "opus",
];

/// Target-language value meaning "keep the original, do not translate".
pub const ORIGINAL_LANGUAGE: &str = "original";
