pub mod google_translator;
