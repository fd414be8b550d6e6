//! Timed toasts
//!
//! At most one toast per kind is kept; pushing a second one replaces the
//! first. The success toast counts down to the wizard closing.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Short feedback such as a password being revealed
    Notice,
    /// The account was created
    Success,
}

impl ToastKind {
    fn accent(self) -> Color {
        match self {
            Self::Notice => Color::Blue,
            Self::Success => Color::Green,
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Self::Notice => " Notice ",
            Self::Success => " Account created ",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
    lifetime: Duration,
}

impl Toast {
    pub fn notice(message: impl Into<String>, lifetime: Duration) -> Self {
        Self::new(ToastKind::Notice, message, lifetime)
    }

    pub fn success(message: impl Into<String>, lifetime: Duration) -> Self {
        Self::new(ToastKind::Success, message, lifetime)
    }

    fn new(kind: ToastKind, message: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
            lifetime,
        }
    }

    /// Time left before the toast disappears, zero once expired
    pub fn remaining(&self, now: Instant) -> Duration {
        self.lifetime
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }
}

/// Draws one toast, with a countdown line for success toasts
pub struct ToastWidget<'a> {
    toast: &'a Toast,
    now: Instant,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast, now: Instant) -> Self {
        Self { toast, now }
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = self.toast.kind.accent();
        Clear.render(area, buf);

        let mut lines = vec![Line::from(self.toast.message.as_str())];
        if self.toast.kind == ToastKind::Success {
            // Round up so the last second still reads "1s"
            let secs = self.toast.remaining(self.now).as_millis().div_ceil(1000);
            lines.push(Line::from(Span::styled(
                format!("Closing in {}s, press any key to exit now", secs),
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent))
                    .title(self.toast.kind.heading())
                    .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
            )
            .render(area, buf);
    }
}

/// Live toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing any live toast of the same kind
    pub fn push(&mut self, toast: Toast) {
        self.toasts.retain(|t| t.kind != toast.kind);
        self.toasts.push(toast);
    }

    /// Drop toasts that have run out at `now`
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    /// The toast to draw; success wins over notices
    pub fn visible(&self) -> Option<&Toast> {
        self.toasts
            .iter()
            .find(|t| t.kind == ToastKind::Success)
            .or_else(|| self.toasts.first())
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}
