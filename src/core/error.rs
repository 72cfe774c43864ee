//! Error types for the leveled logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Numeric level outside `Debug..=Error`
    #[error("Invalid level {value}")]
    InvalidLevel { value: u8 },

    /// Level name that does not match any known level
    #[error("Invalid log level: '{name}'")]
    UnknownLevelName { name: String },

    /// strftime pattern with a specifier chrono cannot render
    #[error("Invalid timestamp format: '{pattern}'")]
    InvalidTimestampFormat { pattern: String },

    /// A `log` facade backend was already installed
    #[error("A global logger is already installed")]
    AlreadyInstalled,

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(value: u8) -> Self {
        LoggerError::InvalidLevel { value }
    }

    /// Create an invalid timestamp format error
    pub fn invalid_timestamp_format(pattern: impl Into<String>) -> Self {
        LoggerError::InvalidTimestampFormat {
            pattern: pattern.into(),
        }
    }

    /// Create an unknown level name error
    pub fn unknown_level_name(name: impl Into<String>) -> Self {
        LoggerError::UnknownLevelName { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(LoggerError::invalid_level(7).to_string(), "Invalid level 7");
        assert_eq!(
            LoggerError::unknown_level_name("loud").to_string(),
            "Invalid log level: 'loud'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
