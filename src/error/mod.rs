//! Error handling for memodeck.
//!
//! | Type | Category | Handling |
//! |------|----------|----------|
//! | [`ValidationError`] | User | Stored on the list state, shown inline |
//! | [`AppError::CounterOverflow`] | Client | Logged, counter left unchanged |
//! | [`UiError`] | User / System | Terminal failures end the session |
//! | [`ConfigError`] | Configuration | Reported at startup |
//!
//! [`AppResult<T>`] is the result alias used across the crate.

mod app_error;
mod category;
mod config;
mod ui;
mod validation;

pub use app_error::AppError;
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use ui::UiError;
pub use validation::{ValidationError, MIN_TASK_LEN_EXCLUSIVE};

/// Type alias for Results using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_error_unification() {
        let ui: AppError = UiError::TerminalInitFailed {
            message: "no tty".to_string(),
        }
        .into();
        let config: AppError = ConfigError::InvalidValue {
            key: "MEMODECK_TICK_MS",
            value: "fast".to_string(),
            reason: "not a number".to_string(),
        }
        .into();
        let io: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();

        assert_eq!(AppError::CounterOverflow.category(), ErrorCategory::Client);
        assert_eq!(ui.category(), ErrorCategory::System);
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(io.category(), ErrorCategory::System);

        for err in [&ui, &config, &io, &AppError::CounterOverflow] {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err: AppError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(err.source().is_some());
        assert!(AppError::CounterOverflow.source().is_none());
    }
}
