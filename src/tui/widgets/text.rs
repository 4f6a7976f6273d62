/// Text widget - a single styled label line

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use super::RenderableWidget;

#[derive(Debug, Clone)]
pub struct Text {
    content: String,
    bold: bool,
    uppercase: bool,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            bold: false,
            uppercase: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    fn display(&self) -> String {
        if self.uppercase {
            self.content.to_uppercase()
        } else {
            self.content.clone()
        }
    }
}

impl RenderableWidget for Text {
    fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let style = if self.bold {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        buf.set_stringn(area.x, area.y, self.display(), area.width as usize, style);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(self.display().width() as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::assert_buffer;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_text_uppercase_heading() {
        let text = Text::new("Set parameters").uppercase().bold();
        let buf = render_widget(&text, 20, 1);

        assert_buffer(&buf, &["SET PARAMETERS"]);
        assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
        assert_eq!(text.preferred_width(), Some(14));
    }

    #[test]
    fn test_text_truncates_to_area() {
        let buf = render_widget(&Text::new("Content width"), 7, 1);
        assert_eq!(buffer_line(&buf, 0), "Content");
    }
}
