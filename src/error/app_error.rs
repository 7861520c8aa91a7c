//! Unified error type for the application.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::ui::UiError;

/// Unified error type.
///
/// Validation failures are not listed here: they are kept as state on the
/// list and rendered inline.
#[derive(Debug)]
pub enum AppError {
    /// The counter reached `u64::MAX`.
    CounterOverflow,

    /// UI/terminal errors.
    Ui(UiError),

    /// Bad configuration.
    Config(ConfigError),

    /// Underlying I/O failure.
    Io(std::io::Error),
}

impl AppError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::CounterOverflow => ErrorCategory::Client,
            AppError::Ui(err) => {
                if err.is_recoverable() {
                    ErrorCategory::User
                } else {
                    ErrorCategory::System
                }
            }
            AppError::Config(_) => ErrorCategory::Configuration,
            AppError::Io(_) => ErrorCategory::System,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::CounterOverflow => "The counter cannot go any higher.".to_string(),
            AppError::Ui(err) => err.user_message(),
            AppError::Config(err) => format!("Configuration error: {}", err),
            AppError::Io(err) => format!("I/O error: {}", err),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::CounterOverflow => "E_COUNTER_OVERFLOW",
            AppError::Ui(err) => err.error_code(),
            AppError::Config(err) => err.error_code(),
            AppError::Io(_) => "E_IO",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::CounterOverflow => write!(f, "counter overflow"),
            AppError::Ui(err) => write!(f, "{}", err),
            AppError::Config(err) => write!(f, "{}", err),
            AppError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Ui(err) => Some(err),
            AppError::Config(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::CounterOverflow => None,
        }
    }
}

impl From<UiError> for AppError {
    fn from(err: UiError) -> Self {
        AppError::Ui(err)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
