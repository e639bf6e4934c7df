//! Unified error types for the demo application.

use thiserror::Error;

/// Unified error type for the demo application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration validation error.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Timestamp formatting error.
    #[error("timestamp format error: {0}")]
    TimestampFormat(#[from] time::error::Format),

    /// IO error (listener bind, socket).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: AppError = io.into();
        assert!(err.to_string().contains("port taken"));
    }

    #[test]
    fn invalid_config_message_passes_through() {
        let err = AppError::InvalidConfig("PORT must be non-zero".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: PORT must be non-zero"
        );
    }
}
