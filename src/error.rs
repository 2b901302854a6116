//! Error types for charset lookup and configuration loading
//!
//! Formatting itself never fails; these only surface at the edges where
//! user-provided names or files are turned into a [`FormatterConfig`].
//!
//! [`FormatterConfig`]: crate::FormatterConfig

use thiserror::Error;

/// Errors that can occur when resolving a charset by name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CharsetError {
    /// The name does not match any supported charset or alias
    #[error("unsupported charset: {name}")]
    Unsupported { name: String },
}

/// Errors that can occur when loading a formatter configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid charset in config: {0}")]
    Charset(#[from] CharsetError),

    /// A blank placeholder would match nowhere, so it is rejected up front
    #[error("placeholder must not be blank")]
    EmptyPlaceholder,
}
