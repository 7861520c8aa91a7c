//! memodeck - a terminal task list demonstrating memoized views and
//! memoized derived values.
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod memo;
pub mod state;
pub mod terminal;
pub mod ui;
