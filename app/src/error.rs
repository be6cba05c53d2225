//! Error types for the catalog shell.
//!
//! None of these reach the user. Callers log them and fall back to defaults.

use thiserror::Error;

/// Result type alias using `ShellError`.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Shell error types.
#[derive(Error, Debug)]
pub enum ShellError {
    /// A tag label outside the fixed vocabulary.
    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    /// Configuration value rejected during validation.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Embedded configuration could not be parsed.
    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Browser API call failed (storage, media query, document root).
    #[error("Host error during {operation}: {message}")]
    Host {
        operation: &'static str,
        message: String,
    },
}

impl ShellError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new host error from a failed browser call.
    pub fn host(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Host {
            operation,
            message: message.into(),
        }
    }

    /// Create a host error from a thrown JavaScript value.
    pub fn from_js(operation: &'static str, value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::host(operation, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_error() {
        let err = ShellError::UnknownTag("lidar".to_string());
        assert_eq!(err.to_string(), "Unknown tag: lidar");
    }

    #[test]
    fn test_config_error() {
        let err = ShellError::config("storage key is empty");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("storage key is empty"));
    }

    #[test]
    fn test_host_error() {
        let err = ShellError::host("localStorage.setItem", "quota exceeded");
        assert!(err.to_string().contains("localStorage.setItem"));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: ShellError = toml_err.into();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
