pub mod pipeline_result;
pub mod transcribe_translate_use_case;
