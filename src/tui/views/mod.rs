//! TUI Views module

pub mod status_bar;
pub mod steps;

use std::time::Instant;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use super::app::App;
use super::layout::{centered_rect, toast_area, WizardLayout};
use super::widgets::ToastWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 80, frame.area());

    let block = Block::default()
        .title(" Create Account ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = WizardLayout::new(inner);
    steps::render_indicator(frame, app.screen(), layout.indicator);
    steps::render_form(frame, app.screen(), layout.form);
    status_bar::render(frame, app, layout.hints);

    if let Some(toast) = app.toasts.visible() {
        frame.render_widget(
            ToastWidget::new(toast, Instant::now()),
            toast_area(frame.area()),
        );
    }
}
