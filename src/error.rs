use crate::config::ConfigField;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BarkError {
    #[error("Failed to read config file {}: {reason}\n\nRe-run one of the --set-* flags to rewrite it.", .path.display())]
    ConfigRead { path: PathBuf, reason: String },

    #[error("Failed to write config file {}: {reason}", .path.display())]
    ConfigWrite { path: PathBuf, reason: String },

    #[error("Could not determine configuration directory. Set BARK_CONFIG_DIR to choose one.")]
    ConfigLocation,

    #[error("{} is not configured. Run 'bark {} <{}>' first.", .field.label(), .field.set_flag(), .field.value_name())]
    MissingCredential { field: ConfigField },

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode API response: {0}")]
    Decode(String),
}
