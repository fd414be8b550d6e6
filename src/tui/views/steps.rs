//! Step indicator and step form views

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::layout::field_rows;
use crate::tui::screen::SignupScreen;
use crate::validation::Field;
use crate::wizard::FormStep;

/// Render the step indicator, highlighting the active marker
pub fn render_indicator(frame: &mut Frame, screen: &SignupScreen, area: Rect) {
    let mut spans = Vec::new();

    for (i, step) in FormStep::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }

        let style = if screen.is_indicator_active(step) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!(" {} {} ", step.number(), step.title()),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the fields of the visible step with their error lines
pub fn render_form(frame: &mut Frame, screen: &SignupScreen, area: Rect) {
    let step = screen.visible_step();
    let fields = Field::for_step(step);
    let focused = screen.focused_field();

    for (field, (input_area, error_area)) in fields.iter().zip(field_rows(area, fields.len())) {
        let input = screen.input(*field).clone().focused(*field == focused);
        frame.render_widget(input, input_area);

        let error = screen.error(*field);
        if !error.is_empty() {
            let line = Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(Paragraph::new(line), error_area);
        }
    }
}
