//! tij-empty demo
//!
//! A list that shows a placeholder while it is empty, loading or failed.
//! Pass a frame sheet path to replace the loading spinner.

use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

use tij_empty::app::App;
use tij_empty::logging::{default_log_dir, init_logging};
use tij_empty::model::load_image_sequence;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = match init_logging(&default_log_dir()) {
        Ok((path, guard)) => {
            tracing::info!(path = %path.display(), "logging initialized");
            Some(guard)
        }
        Err(err) => {
            eprintln!("logging disabled: {err}");
            None
        }
    };

    let app = build_app(std::env::args().nth(1));

    let terminal = ratatui::init();
    let result = execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| run(terminal, app));
    // Leave raw mode even if the loop or mouse capture failed
    if let Err(err) = execute!(std::io::stdout(), DisableMouseCapture) {
        tracing::warn!(error = %err, "failed to disable mouse capture");
    }
    ratatui::restore();
    result
}

/// Build the app, loading the spinner frames from `frames_path` if given
fn build_app(frames_path: Option<String>) -> App {
    let Some(path) = frames_path else {
        return App::new();
    };

    match load_image_sequence(&path) {
        Ok(frames) => {
            tracing::info!(%path, frames = frames.len(), "loaded frame sheet");
            App::with_spinner(frames)
        }
        Err(err) => {
            tracing::warn!(%path, error = %err, "failed to load frame sheet");
            let mut app = App::new();
            app.error_message = Some(format!("{path}: {err}"));
            app
        }
    }
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a short timeout so the spinner keeps moving while no input
/// arrives. The app ticks after every poll, with or without an event.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    let event = if event::poll(Duration::from_millis(100))? {
        Some(event::read()?)
    } else {
        None
    };
    app.on_event(event, Instant::now());
    Ok(())
}
