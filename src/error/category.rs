//! Error category classification for unified error handling.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User action required (invalid input).
    /// Shown inline, the application keeps running.
    User,

    /// Client-side errors (bugs, invalid state, arithmetic overflow).
    Client,

    /// System/OS errors (terminal, filesystem).
    System,

    /// Configuration errors (bad environment values).
    /// Not recoverable until configuration is corrected.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if the application can keep running after an error in
    /// this category.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCategory::User)
    }

    /// Short label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_user_errors_are_recoverable() {
        assert!(ErrorCategory::User.is_recoverable());
        assert!(!ErrorCategory::Client.is_recoverable());
        assert!(!ErrorCategory::System.is_recoverable());
        assert!(!ErrorCategory::Configuration.is_recoverable());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }
}
