use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use thiserror::Error;
use whisper_rs::{WhisperContext, WhisperContextParameters};

use crate::shared::constants::{WHISPER_MODEL_NAME, WHISPER_MODEL_URL};
use crate::shared::model_resolver;

use super::execution;

#[derive(Error, Debug, Clone)]
pub enum ModelInitError {
    #[error("could not resolve model file: {0}")]
    Resolve(String),
    #[error("could not load whisper model: {0}")]
    Load(String),
}

/// Lazily loads the Whisper model and caches it for the provider's lifetime.
///
/// The heavyweight context is built at most once; concurrent first calls
/// cannot race two loads. A failed initialization is cached as well, so
/// later calls fail fast with the original error instead of retrying.
pub struct WhisperModelProvider {
    model_path: Option<PathBuf>,
    slot: OnceLock<Result<Arc<WhisperContext>, ModelInitError>>,
}

impl WhisperModelProvider {
    /// Provider that resolves the model from cache or download on first use.
    pub fn new() -> Self {
        Self {
            model_path: None,
            slot: OnceLock::new(),
        }
    }

    /// Provider backed by a specific model file, skipping resolution.
    pub fn with_model_path(path: PathBuf) -> Self {
        Self {
            model_path: Some(path),
            slot: OnceLock::new(),
        }
    }

    /// The cached model context, initializing it on first call.
    pub fn context(&self) -> Result<Arc<WhisperContext>, ModelInitError> {
        self.slot.get_or_init(|| self.load()).clone()
    }

    fn load(&self) -> Result<Arc<WhisperContext>, ModelInitError> {
        let path = match &self.model_path {
            Some(path) => path.clone(),
            None => model_resolver::resolve(WHISPER_MODEL_NAME, WHISPER_MODEL_URL, None, None)
                .map_err(|e| ModelInitError::Resolve(e.to_string()))?,
        };

        if !path.exists() {
            return Err(ModelInitError::Load(format!(
                "model file not found at {}",
                path.display()
            )));
        }
        let path_str = path.to_str().ok_or_else(|| {
            ModelInitError::Load(format!("non-UTF-8 model path: {}", path.display()))
        })?;

        let use_gpu = execution::gpu_available();
        log::info!(
            "loading whisper model from {} ({} execution)",
            path.display(),
            if use_gpu { "gpu" } else { "cpu" }
        );

        let mut params = WhisperContextParameters::default();
        params.use_gpu(use_gpu);

        let context = WhisperContext::new_with_params(path_str, params)
            .map_err(|e| ModelInitError::Load(e.to_string()))?;
        Ok(Arc::new(context))
    }
}

impl Default for WhisperModelProvider {
    fn default() -> Self {
        Self::new()
    }
}
