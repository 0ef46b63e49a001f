pub mod constants;
pub mod language;
pub mod model_resolver;
