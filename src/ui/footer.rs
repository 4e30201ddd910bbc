use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the bottom line of a screen shows.
pub enum StatusBar<'a> {
    Hints(&'a str),
    Info(&'a str),
    Error(&'a str),
}

impl StatusBar<'_> {
    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let (text, style) = match self {
            StatusBar::Hints(hints) => (
                format!(" {}", hints),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            ),
            StatusBar::Info(message) => (format!(" {}", message), Style::default().fg(STATUS_OK)),
            StatusBar::Error(message) => {
                (format!(" {}", message), Style::default().fg(STATUS_ERROR))
            }
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count.
        let padding = (area.width as usize)
            .saturating_sub(text.chars().count())
            .saturating_sub(version.chars().count());

        Paragraph::new(Line::from(vec![
            Span::styled(text, style),
            Span::raw(" ".repeat(padding)),
            Span::styled(version, Style::default().fg(MUTED_TEXT)),
        ]))
    }
}
