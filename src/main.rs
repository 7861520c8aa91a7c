use memodeck::app::{App, AppMessage};
use memodeck::config::AppConfig;
use memodeck::error::{AppError, ErrorCategory, UiError};
use memodeck::logging::init_file_logging;
use memodeck::terminal::{setup_panic_hook, TerminalManager, TitleHook};
use memodeck::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
memodeck - task list with memoized views

Usage: memodeck [--version] [--help]

Environment:
  MEMODECK_INITIAL_TODOS  number of seeded tasks (default 5)
  MEMODECK_TICK_MS        event loop tick in ms (default 16)
  MEMODECK_NO_TITLE       do not set the terminal title
  MEMODECK_LOG            append logs to this file (RUST_LOG filters)";

fn main() -> Result<()> {
    // Handle informational flags before any initialization
    if std::env::args().any(|arg| arg == "--version" || arg == "-V") {
        println!("memodeck {}", VERSION);
        return Ok(());
    }
    if std::env::args().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    color_eyre::install()?;

    let config = AppConfig::from_env()?;
    if let Some(path) = &config.log_file {
        if !init_file_logging(path)? {
            eprintln!("Warning: logging was already initialized");
        }
    }
    tracing::info!(version = VERSION, ?config, "starting memodeck");

    // Restore the terminal on panic before the report is printed
    setup_panic_hook();

    let mut app = if config.set_title {
        App::with_hook(&config, TitleHook::stdout())
    } else {
        App::new(&config)
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app, &config));
    term_manager.restore()?;

    match &result {
        Ok(()) => {
            let snapshot = serde_json::to_string(&app.state().snapshot())
                .unwrap_or_else(|e| format!("<unserializable: {}>", e));
            tracing::info!(state = %snapshot, "memodeck exited");
        }
        Err(err) => {
            tracing::error!(
                code = err.error_code(),
                category = %err.category(),
                "memodeck stopped: {}",
                err
            );
        }
    }
    result.map_err(Into::into)
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &AppConfig,
) -> Result<(), AppError>
where
    B::Error: std::fmt::Display,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Report the settled summary before anything observes the new state
        app.settle();

        if app.needs_redraw {
            terminal
                .draw(|f| ui::render(f, app))
                .map_err(|e| UiError::RenderFailed {
                    component: "screen".to_string(),
                    message: e.to_string(),
                })?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            break;
        }

        let tick = tokio::time::sleep(config.tick_rate);

        tokio::select! {
            _ = tick => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Err(err) = app.handle_key_event(key) {
                            if err.category() == ErrorCategory::Client {
                                // Counter overflow: keep running, the counter stays put
                                tracing::warn!(code = err.error_code(), "{}", err);
                            } else {
                                return Err(err);
                            }
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        return Err(UiError::InputError { message: e.to_string() }.into());
                    }
                    None => break,
                }
            }

            Some(msg) = recv_message(&mut message_rx) => {
                app.handle_message(msg);
            }
        }
    }

    app.message_rx = message_rx;
    Ok(())
}

async fn recv_message(
    rx: &mut Option<mpsc::UnboundedReceiver<AppMessage>>,
) -> Option<AppMessage> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
