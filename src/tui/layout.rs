//! Layout definitions for the TUI
//!
//! The wizard is a centered panel: step indicator on top, the active step's
//! fields in the middle, key hints at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions of the wizard panel
pub struct WizardLayout {
    /// Step indicator
    pub indicator: Rect,
    /// Fields of the active step
    pub form: Rect,
    /// Key hints
    pub hints: Rect,
}

impl WizardLayout {
    /// Calculate layout from the panel's inner area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Step indicator
                Constraint::Length(1), // Spacer
                Constraint::Min(3),    // Form
                Constraint::Length(1), // Hints
            ])
            .split(area);

        Self {
            indicator: chunks[0],
            form: chunks[2],
            hints: chunks[3],
        }
    }
}

/// Rows for one field: input line then error line
pub fn field_rows(area: Rect, count: usize) -> Vec<(Rect, Rect)> {
    let constraints: Vec<Constraint> = (0..count)
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    (0..count)
        .map(|i| (chunks[i * 3], chunks[i * 3 + 1]))
        .collect()
}

/// Helper to create a centered rect using up certain percentage of the available rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Area for a toast in the top-right corner
pub fn toast_area(area: Rect) -> Rect {
    let width = area.width.min(60);
    let height = area.height.min(5);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}
