//! Configuration for the formatter

use std::path::Path;

use serde::Deserialize;

use crate::charset::Charset;
use crate::error::ConfigError;
use crate::formatter::scan::is_blank;
use crate::value::NullBytePolicy;

/// Placeholder token used when none is configured
pub const DEFAULT_PLACEHOLDER: &str = "?";

/// Configuration options for formatting
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Literal token marking each substitution point
    pub placeholder: String,

    /// Charset used to decode byte arguments
    pub charset: Charset,

    /// Handling of missing entries in nullable byte arguments
    pub null_bytes: NullBytePolicy,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            charset: Charset::Utf8,
            null_bytes: NullBytePolicy::default(),
        }
    }
}

impl FormatterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Missing keys keep their defaults. A blank placeholder is rejected.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FormatterConfig = toml::from_str(content)?;
        if is_blank(&config.placeholder) {
            return Err(ConfigError::EmptyPlaceholder);
        }
        Ok(config)
    }

    /// Set the placeholder token
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the charset for byte arguments
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Set the charset by name, e.g. `"UTF-8"` or `"latin1"`
    pub fn with_charset_name(self, name: &str) -> Result<Self, ConfigError> {
        let charset = Charset::for_name(name)?;
        Ok(self.with_charset(charset))
    }

    /// Set the null byte policy
    pub fn with_null_bytes(mut self, policy: NullBytePolicy) -> Self {
        self.null_bytes = policy;
        self
    }
}
