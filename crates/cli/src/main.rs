use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use chrono::Local;
use clap::Parser;

use voicescribe_core::audio::domain::uploaded_audio::UploadedAudio;
use voicescribe_core::audio::infrastructure::audio_normalizer::AudioNormalizer;
use voicescribe_core::audio::infrastructure::ffmpeg_decoder::FfmpegDecoder;
use voicescribe_core::pipeline::pipeline_result::{PipelineResult, StageOutcome};
use voicescribe_core::pipeline::transcribe_translate_use_case::TranscribeTranslateUseCase;
use voicescribe_core::shared::constants::{AUDIO_EXTENSIONS, ORIGINAL_LANGUAGE};
use voicescribe_core::shared::language::supported_languages;
use voicescribe_core::synthesis::infrastructure::gtts_synthesizer::GttsSynthesizer;
use voicescribe_core::transcription::infrastructure::model_provider::WhisperModelProvider;
use voicescribe_core::transcription::infrastructure::whisper_transcriber::WhisperTranscriber;
use voicescribe_core::translation::infrastructure::google_translator::GoogleTranslator;

/// Transcribe an audio file, optionally translate it, and speak the results.
#[derive(Parser)]
#[command(name = "voicescribe")]
struct Cli {
    /// Input audio file (wav, mp3, m4a, aac, ogg, wma, flac, alac, aiff, opus).
    input: Option<PathBuf>,

    /// Target language for translation (name or 2-letter code); "original" keeps the source language.
    #[arg(long, default_value = ORIGINAL_LANGUAGE)]
    translate_to: String,

    /// Display title for the transcript (defaults to the filename).
    #[arg(long)]
    title: Option<String>,

    /// Directory for transcript and speech artifact files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Path to a local whisper model file (skips the cache/download lookup).
    #[arg(long)]
    model: Option<PathBuf>,

    /// List supported target languages and exit.
    #[arg(long)]
    list_languages: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_languages {
        println!("{}", ORIGINAL_LANGUAGE);
        for name in supported_languages() {
            println!("{name}");
        }
        return Ok(());
    }

    let input = cli
        .input
        .as_deref()
        .ok_or("no input file given (see --help)")?;
    validate_input(input)?;

    let bytes = fs::read(input)?;
    let filename = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let upload = UploadedAudio::new(filename, bytes);

    let title = cli.title.as_deref().unwrap_or(upload.filename());
    println!("{title}");
    println!("  file: {} ({:.2} KB)", upload.filename(), upload.size() as f64 / 1024.0);

    let use_case = build_pipeline(cli.model);
    let result = use_case.run(&upload, &cli.translate_to)?;

    print_result(&result, &cli.translate_to);
    write_artifacts(&result, &cli.out_dir)?;

    Ok(())
}

fn validate_input(input: &Path) -> Result<(), String> {
    if !input.exists() {
        return Err(format!("input file not found: {}", input.display()));
    }
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        return Err(format!(
            "unsupported audio format '{ext}' (supported: {})",
            AUDIO_EXTENSIONS.join(", ")
        ));
    }
    Ok(())
}

fn build_pipeline(model: Option<PathBuf>) -> TranscribeTranslateUseCase {
    let provider = Arc::new(match model {
        Some(path) => WhisperModelProvider::with_model_path(path),
        None => WhisperModelProvider::new(),
    });

    TranscribeTranslateUseCase::new(
        AudioNormalizer::new(Box::new(FfmpegDecoder)),
        Box::new(WhisperTranscriber::new(provider)),
        Box::new(GoogleTranslator::new()),
        Box::new(GttsSynthesizer::new()),
    )
}

fn print_result(result: &PipelineResult, target_language: &str) {
    if result.original.is_empty() {
        println!("\nNo speech recognized in the audio.");
        return;
    }

    println!("\nTranscription (detected language: {}):", result.detected_language);
    println!("{}", result.original);

    if let Some(reason) = result.original_speech.failure() {
        eprintln!("Warning: original speech unavailable: {reason}");
    }

    match &result.translation {
        StageOutcome::Produced(translation) => {
            println!("\nTranslation ({}):", translation.target_language);
            println!("{}", translation.text);
            if let Some(reason) = result.translated_speech.failure() {
                eprintln!("Warning: translated speech unavailable: {reason}");
            }
        }
        StageOutcome::Failed(reason) => {
            eprintln!("Warning: translation to '{target_language}' failed: {reason}");
        }
        StageOutcome::Skipped => {}
    }
}

fn write_artifacts(result: &PipelineResult, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if result.original.is_empty() {
        return Ok(());
    }

    fs::create_dir_all(out_dir)?;
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");

    let transcript_path = out_dir.join(format!("transcription_{timestamp}.txt"));
    fs::write(&transcript_path, &result.original)?;
    println!("\nSaved {}", transcript_path.display());

    if let Some(artifact) = result.original_speech.produced() {
        let path = out_dir.join(format!("original_speech_{timestamp}.mp3"));
        fs::write(&path, &artifact.audio_bytes)?;
        println!("Saved {}", path.display());
    }

    if let Some(translation) = result.translation.produced() {
        let path = out_dir.join(format!("translation_{timestamp}.txt"));
        fs::write(&path, &translation.text)?;
        println!("Saved {}", path.display());

        if let Some(artifact) = result.translated_speech.produced() {
            let path = out_dir.join(format!("translated_speech_{timestamp}.mp3"));
            fs::write(&path, &artifact.audio_bytes)?;
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}
