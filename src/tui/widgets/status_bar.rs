/// StatusBar widget - displays the status message and keyboard hints at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator
/// - Bottom line: left status message (or error) and right-aligned key hints
///
/// Error messages are displayed in red when present.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Represents a keyboard hint displayed in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The keyboard key (e.g., "p", "Tab")
    pub key: String,
    /// The action description (e.g., "Panel", "Quit")
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }

    fn width(&self) -> usize {
        self.key.width() + 1 + self.action.width()
    }
}

/// Widget for displaying status information and keyboard hints
#[derive(Debug, Default)]
pub struct StatusBar {
    pub message: Option<String>,
    pub is_error: bool,
    pub hints: Vec<KeyHint>,
}

const HINT_GAP: &str = "  ";

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a status message (non-error)
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.message = Some(status.into());
        self.is_error = false;
        self
    }

    /// Set an error message
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.message = Some(error.into());
        self.is_error = true;
        self
    }

    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Build the left side status message
    fn build_left_text(&self) -> String {
        match (&self.message, self.is_error) {
            (Some(msg), true) => format!(" ERROR: {}", msg),
            (Some(msg), false) => format!(" {}", msg),
            (None, _) => String::new(),
        }
    }

    fn hints_width(&self) -> usize {
        let gaps = self.hints.len().saturating_sub(1) * HINT_GAP.len();
        self.hints.iter().map(KeyHint::width).sum::<usize>() + gaps
    }

    fn render_hints(&self, x: u16, y: u16, right: u16, buf: &mut Buffer) {
        let mut x = x;
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                x += HINT_GAP.len() as u16;
            }
            if x >= right {
                break;
            }
            let (end_x, _) = buf.set_stringn(
                x,
                y,
                &hint.key,
                right.saturating_sub(x) as usize,
                Style::default().add_modifier(Modifier::BOLD),
            );
            let (end_x, _) = buf.set_stringn(
                end_x + 1,
                y,
                &hint.action,
                right.saturating_sub(end_x + 1) as usize,
                Style::default(),
            );
            x = end_x;
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let separator = config.box_chars().horizontal.repeat(area.width as usize);
        buf.set_string(area.x, area.y, &separator, Style::default().add_modifier(Modifier::DIM));

        let y = area.y + 1;
        let left_text = self.build_left_text();
        let left_style = if self.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        let (left_end, _) = buf.set_stringn(area.x, y, &left_text, area.width as usize, left_style);

        // Hints are right-aligned with a 1 char margin; dropped when they would overlap the message
        let hints_width = self.hints_width() as u16;
        let hints_x = area.right().saturating_sub(hints_width + 1);
        if !self.hints.is_empty() && hints_x > left_end && hints_x >= area.x {
            self.render_hints(hints_x, y, area.right(), buf);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }

    fn preferred_width(&self) -> Option<u16> {
        None // Adapts to available width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::assert_buffer;
    use crate::tui::widgets::testing::*;

    fn hints() -> Vec<KeyHint> {
        vec![KeyHint::new("p", "Panel"), KeyHint::new("q", "Quit")]
    }

    #[test]
    fn test_status_bar_with_status_message() {
        let widget = StatusBar::new().with_status("Applied").with_hints(hints());
        let buf = render_widget(&widget, 40, 2);
        assert_buffer(
            &buf,
            &[
                "────────────────────────────────────────",
                " Applied                p Panel  q Quit",
            ],
        );
    }

    #[test]
    fn test_status_bar_without_message() {
        let widget = StatusBar::new().with_hints(hints());
        let buf = render_widget_with_config(&widget, 20, 2, &test_config_ascii());
        assert_buffer(&buf, &["--------------------", "    p Panel  q Quit"]);
    }

    #[test]
    fn test_status_bar_error_message() {
        let widget = StatusBar::new().with_error("Bad config");
        let buf = render_widget(&widget, 30, 2);
        assert_buffer(
            &buf,
            &["──────────────────────────────", " ERROR: Bad config"],
        );
        assert_eq!(buf[(1, 1)].fg, Color::Red);
    }

    #[test]
    fn test_status_bar_drops_hints_that_overlap_message() {
        let widget = StatusBar::new()
            .with_status("A fairly long message")
            .with_hints(hints());
        let buf = render_widget(&widget, 30, 2);
        assert_buffer(
            &buf,
            &["──────────────────────────────", " A fairly long message"],
        );
    }

    #[test]
    fn test_status_bar_too_short_renders_nothing() {
        let widget = StatusBar::new().with_status("Applied");
        let buf = render_widget(&widget, 30, 1);
        assert_buffer(&buf, &[""]);
    }
}
