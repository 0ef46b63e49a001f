pub mod speech_synthesizer;
