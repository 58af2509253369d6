//! Application error type.

use std::path::PathBuf;

use orrery_config::ConfigError;

/// Anything that can abort a showcase run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("i/o error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode png: {0}")]
    Png(#[from] png::EncodingError),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| AppError::Io { path, source }
    }
}
