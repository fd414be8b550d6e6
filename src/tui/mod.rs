//! Terminal User Interface module
//!
//! A ratatui front end for the registration wizard. [`screen::SignupScreen`]
//! is the form surface the wizard drives; views draw from it and the
//! handler turns key presses into wizard calls.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod screen;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_wizard;
