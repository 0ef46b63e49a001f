//! End-to-end pipeline runs against the real decoder and whisper model.
//!
//! These download the model on first run and are ignored by default.

use std::f64::consts::PI;
use std::sync::Arc;

use voicescribe_core::audio::domain::uploaded_audio::UploadedAudio;
use voicescribe_core::audio::infrastructure::audio_normalizer::AudioNormalizer;
use voicescribe_core::audio::infrastructure::ffmpeg_decoder::FfmpegDecoder;
use voicescribe_core::pipeline::transcribe_translate_use_case::TranscribeTranslateUseCase;
use voicescribe_core::shared::constants::ORIGINAL_LANGUAGE;
use voicescribe_core::synthesis::infrastructure::gtts_synthesizer::GttsSynthesizer;
use voicescribe_core::transcription::infrastructure::model_provider::WhisperModelProvider;
use voicescribe_core::transcription::infrastructure::whisper_transcriber::WhisperTranscriber;
use voicescribe_core::translation::infrastructure::google_translator::GoogleTranslator;

/// Mono 16-bit PCM WAV with `amplitude` 0.0 producing pure silence.
fn wav_bytes(seconds: f64, sample_rate: u32, amplitude: f64) -> Vec<u8> {
    let num_samples = (seconds * sample_rate as f64) as usize;
    let data_len = (num_samples * 2) as u32;
    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVEfmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for i in 0..num_samples {
        let t = i as f64 / sample_rate as f64;
        let v = (amplitude * (2.0 * PI * 220.0 * t).sin() * i16::MAX as f64) as i16;
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

fn real_pipeline() -> TranscribeTranslateUseCase {
    let provider = Arc::new(WhisperModelProvider::new());
    TranscribeTranslateUseCase::new(
        AudioNormalizer::new(Box::new(FfmpegDecoder)),
        Box::new(WhisperTranscriber::new(provider)),
        Box::new(GoogleTranslator::new()),
        Box::new(GttsSynthesizer::new()),
    )
}

#[test]
#[ignore] // Requires the whisper model (downloaded on first run)
fn silence_yields_no_artifacts() {
    let upload = UploadedAudio::new("silence.wav", wav_bytes(3.0, 16000, 0.0));
    let result = real_pipeline().run(&upload, ORIGINAL_LANGUAGE).unwrap();

    assert!(result.original.is_empty(), "got text: {}", result.original);
    assert!(result.original_speech.is_skipped());
    assert!(result.translation.is_skipped());
    assert!(result.translated_speech.is_skipped());
}

#[test]
#[ignore] // Requires the whisper model and network access to both services
fn tone_with_translation_request_still_terminates() {
    // A pure tone is not speech; whatever whisper hears, the run must end
    // in a well-formed result rather than an error.
    let upload = UploadedAudio::new("tone.wav", wav_bytes(2.0, 16000, 0.3));
    let result = real_pipeline().run(&upload, "french");
    assert!(result.is_ok());
}
