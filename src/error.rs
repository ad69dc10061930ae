/*
 * Error Module
 *
 * Errors raised while loading and validating the field configuration.
 * The simulation itself has no failing operations once a surface exists.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

/// Result type alias for particle field operations
pub type Result<T> = std::result::Result<T, FieldError>;
