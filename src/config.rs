//! Runtime configuration.
//!
//! Built with the builder methods or read from the environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MEMODECK_INITIAL_TODOS` | 5 | Number of seeded `"Todo N"` tasks |
//! | `MEMODECK_TICK_MS` | 16 | Event loop tick in milliseconds |
//! | `MEMODECK_NO_TITLE` | unset | Disable the window-title summary hook |
//! | `MEMODECK_LOG` | unset | Write logs to this file |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const ENV_INITIAL_TODOS: &str = "MEMODECK_INITIAL_TODOS";
pub const ENV_TICK_MS: &str = "MEMODECK_TICK_MS";
pub const ENV_NO_TITLE: &str = "MEMODECK_NO_TITLE";
pub const ENV_LOG: &str = "MEMODECK_LOG";

/// Configuration for the application.
///
/// # Example
///
/// ```
/// use memodeck::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_initial_todo_count(3)
///     .with_set_title(false);
/// assert_eq!(config.initial_todo_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Number of `"Todo N"` tasks present at startup
    pub initial_todo_count: usize,
    /// Event loop tick (redraw polling interval)
    pub tick_rate: Duration,
    /// Whether the summary hook sets the terminal window title
    pub set_title: bool,
    /// Log file; logging is off when `None`
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_todo_count: 5,
            tick_rate: Duration::from_millis(16),
            set_title: true,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_todo_count(mut self, count: usize) -> Self {
        self.initial_todo_count = count;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_set_title(mut self, set_title: bool) -> Self {
        self.set_title = set_title;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Read the `MEMODECK_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_INITIAL_TODOS) {
            config.initial_todo_count = parse_number(ENV_INITIAL_TODOS, &value)?;
        }

        if let Some(value) = lookup(ENV_TICK_MS) {
            let millis: u64 = parse_number(ENV_TICK_MS, &value)?;
            if millis == 0 {
                return Err(ConfigError::InvalidValue {
                    key: ENV_TICK_MS,
                    value,
                    reason: "tick must be at least 1ms".to_string(),
                });
            }
            config.tick_rate = Duration::from_millis(millis);
        }

        if lookup(ENV_NO_TITLE).is_some() {
            config.set_title = false;
        }

        if let Some(path) = lookup(ENV_LOG).filter(|p| !p.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

fn parse_number<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
