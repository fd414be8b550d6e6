//! Key hint bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::FormStep;

/// Render key hints for the active step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str, color: Color| Span::styled(k, Style::default().fg(color));

    let mut spans = vec![key("[Tab]", Color::White), Span::raw(" Next field  ")];

    match app.active_step() {
        FormStep::Personal => {
            spans.push(key("[Enter]", Color::Green));
            spans.push(Span::raw(" Continue  "));
            spans.push(key("[Esc]", Color::Red));
            spans.push(Span::raw(" Cancel"));
        }
        FormStep::Account => {
            spans.push(key("[Enter]", Color::Green));
            spans.push(Span::raw(" Create account  "));
            spans.push(key("[Esc]", Color::Yellow));
            spans.push(Span::raw(" Back  "));
            spans.push(key("[F2]", Color::White));
            spans.push(Span::raw(" Show/hide password"));
        }
    }

    if app.is_finished() {
        spans = vec![Span::styled(
            "Press any key to exit",
            Style::default().fg(Color::Green),
        )];
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
