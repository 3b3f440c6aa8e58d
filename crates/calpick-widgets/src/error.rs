use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failure to load a serialized picker configuration.
///
/// Only the document syntax can fail. Malformed date strings or unknown
/// languages inside a well-formed document degrade to their defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
