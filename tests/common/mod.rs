//! Common test utilities for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use memodeck::app::App;
use memodeck::config::AppConfig;

/// Summaries delivered to a recording hook, in order.
pub type SummaryLog = Rc<RefCell<Vec<(usize, u64)>>>;

/// App with the default config and a hook that records every summary.
pub fn recording_app() -> (App, SummaryLog) {
    recording_app_with(&AppConfig::default())
}

pub fn recording_app_with(config: &AppConfig) -> (App, SummaryLog) {
    let log: SummaryLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let app = App::with_hook(config, move |count: usize, counter: u64| {
        sink.borrow_mut().push((count, counter));
    });
    (app, log)
}

/// Task texts of the app's current snapshot.
pub fn task_texts(app: &App) -> Vec<String> {
    app.todos().iter().map(|t| t.to_string()).collect()
}
