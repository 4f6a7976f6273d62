/// ArrowButton widget - the toggle control beside the panel
///
/// Purely presentational: shows which way the panel will move when
/// activated. The runtime turns a click on it into a toggle request.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use crate::config::DisplayConfig;
use super::{focus_style, RenderableWidget};

/// Width and height of the arrow button
pub const ARROW_BUTTON_SIZE: u16 = 3;

#[derive(Debug, Clone, Copy)]
pub struct ArrowButton {
    pub is_open: bool,
}

impl ArrowButton {
    pub fn new(is_open: bool) -> Self {
        Self { is_open }
    }
}

impl RenderableWidget for ArrowButton {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < ARROW_BUTTON_SIZE || area.height < ARROW_BUTTON_SIZE {
            return;
        }
        let area = Rect::new(area.x, area.y, ARROW_BUTTON_SIZE, ARROW_BUTTON_SIZE);
        let chars = config.box_chars();
        let border_style = if self.is_open {
            focus_style(true, config)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .render(area, buf);

        let arrow = if self.is_open { &chars.arrow_close } else { &chars.arrow_open };
        buf.set_string(area.x + 1, area.y + 1, arrow, border_style);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(ARROW_BUTTON_SIZE)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(ARROW_BUTTON_SIZE)
    }
}
