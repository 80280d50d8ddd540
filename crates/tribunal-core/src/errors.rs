use thiserror::Error;

/// Configuration loading or validation failure.
#[derive(Debug, Error)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);
