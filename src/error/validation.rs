//! Validation failures for user-submitted task text.

use thiserror::Error;

/// Minimum accepted length is one more than this, counted in characters
/// after trimming.
pub const MIN_TASK_LEN_EXCLUSIVE: usize = 5;

/// Rejection of a submitted task.
///
/// This is user-input state rather than a fault: it is stored and shown next
/// to the input field until the next edit or successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task must be more than 5 characters.")]
    TooShort { len: usize },
}

impl ValidationError {
    /// Message shown under the input field.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::TooShort { .. } => "E_VALIDATION_SHORT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_message_is_fixed() {
        let err = ValidationError::TooShort { len: 2 };
        assert_eq!(err.user_message(), "Task must be more than 5 characters.");
        assert_eq!(err.error_code(), "E_VALIDATION_SHORT");
    }
}
