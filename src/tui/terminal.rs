//! Terminal setup and teardown
//!
//! Initializes and restores the terminal, including a panic hook that
//! restores it on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::{error, info};

use crate::config::Settings;
use crate::wizard::Registration;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        error!("wizard panicked: {}", panic_info);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the signup wizard until it is submitted or cancelled
///
/// Returns the registration payload when the submission went through.
pub fn run_wizard(settings: &Settings) -> Result<Option<Registration>> {
    let mut app = App::new(settings)?;
    let mut terminal = init_terminal()?;
    info!("signup wizard started");

    let outcome = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    outcome?;

    if app.registration.is_none() {
        info!("signup wizard cancelled");
    }
    Ok(app.registration)
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }

    Ok(())
}
