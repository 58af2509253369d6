//! Configuration error types.

/// Errors that can occur when locating, loading, or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The OS exposes no per-user configuration directory and none was given.
    #[error("no configuration directory available; pass --config")]
    NoConfigDir,

    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
