pub mod gtts_synthesizer;
