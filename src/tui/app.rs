//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::Settings;
use crate::error::SignupResult;
use crate::wizard::{FormStep, Registration, SubmitOutcome, WizardFormValidator};

use super::screen::SignupScreen;
use super::widgets::{Toast, ToastQueue};

/// Main application state
pub struct App {
    /// The wizard, bound to the on-screen form
    pub wizard: WizardFormValidator<SignupScreen>,

    /// Toasts currently on screen
    pub toasts: ToastQueue,

    /// Lifetime of the success toast, in seconds
    pub notification_secs: u64,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Set once the submission went through
    pub registration: Option<Registration>,
}

impl App {
    /// Create app state from settings
    pub fn new(settings: &Settings) -> SignupResult<Self> {
        let screen = SignupScreen::new(settings.mask_passwords);
        let wizard = WizardFormValidator::new(screen)?.with_focus_mode(settings.focus_mode);

        Ok(Self {
            wizard,
            toasts: ToastQueue::new(),
            notification_secs: settings.notification_secs,
            should_quit: false,
            registration: None,
        })
    }

    /// The on-screen form
    pub fn screen(&self) -> &SignupScreen {
        self.wizard.surface()
    }

    /// The on-screen form, mutably
    pub fn screen_mut(&mut self) -> &mut SignupScreen {
        self.wizard.surface_mut()
    }

    /// The active wizard step
    pub fn active_step(&self) -> FormStep {
        self.wizard.active_step()
    }

    /// Whether the submission has gone through
    pub fn is_finished(&self) -> bool {
        self.registration.is_some()
    }

    /// Try to move to the account step
    pub fn advance(&mut self) -> SignupResult<()> {
        self.wizard.advance_to_step(FormStep::Account)?;
        Ok(())
    }

    /// Go back to the personal details step
    pub fn go_back(&mut self) -> SignupResult<()> {
        self.wizard.return_to_step(FormStep::Personal)
    }

    /// Try to submit the form
    pub fn submit(&mut self) -> SignupResult<()> {
        if let SubmitOutcome::Submitted = self.wizard.submit()? {
            let registration = Registration::from_values(&self.wizard.values());
            info!(id = %registration.id, "registration ready for hand-off");
            self.registration = Some(registration);
        }

        let lifetime = Duration::from_secs(self.notification_secs);
        for message in self.screen_mut().take_acknowledgments() {
            self.toasts.push(Toast::success(message, lifetime));
        }
        Ok(())
    }

    /// Toggle visibility of the focused password
    pub fn toggle_password(&mut self) {
        if let Some(masked) = self.screen_mut().toggle_reveal() {
            let message = if masked {
                "Password hidden"
            } else {
                "Password visible"
            };
            self.toasts
                .push(Toast::notice(message, Duration::from_secs(2)));
        }
    }

    /// Periodic housekeeping; leaves once the success toast has expired
    pub fn tick(&mut self) {
        self.toasts.prune(Instant::now());
        if self.is_finished() && self.toasts.is_empty() {
            self.quit();
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
