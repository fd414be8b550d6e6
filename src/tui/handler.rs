//! Event handler for the TUI
//!
//! Maps key presses onto wizard operations and input editing:
//!
//! | key | step 1 | step 2 |
//! |---|---|---|
//! | Enter | advance | submit |
//! | Esc | quit | back to step 1 |
//! | Tab / Down, Shift+Tab / Up | next / previous field | same |
//! | F2, Ctrl+R | | show/hide password |
//! | Ctrl+C | quit | quit |

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::SignupResult;
use crate::wizard::FormStep;

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> SignupResult<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> SignupResult<()> {
    // After a successful submission any key leaves
    if app.is_finished() {
        app.quit();
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => app.quit(),

        KeyCode::Char('r') if ctrl => app.toggle_password(),
        KeyCode::F(2) => app.toggle_password(),

        KeyCode::Enter => match app.active_step() {
            FormStep::Personal => app.advance()?,
            FormStep::Account => app.submit()?,
        },

        KeyCode::Esc => match app.active_step() {
            FormStep::Personal => app.quit(),
            FormStep::Account => app.go_back()?,
        },

        KeyCode::Tab | KeyCode::Down => app.screen_mut().next_field(),
        KeyCode::BackTab | KeyCode::Up => app.screen_mut().prev_field(),

        KeyCode::Backspace => app.screen_mut().focused_input_mut().backspace(),
        KeyCode::Delete => app.screen_mut().focused_input_mut().delete(),
        KeyCode::Left => app.screen_mut().focused_input_mut().move_left(),
        KeyCode::Right => app.screen_mut().focused_input_mut().move_right(),
        KeyCode::Home => app.screen_mut().focused_input_mut().move_start(),
        KeyCode::End => app.screen_mut().focused_input_mut().move_end(),

        KeyCode::Char(c) if !ctrl => app.screen_mut().focused_input_mut().insert(c),

        _ => {}
    }

    Ok(())
}
