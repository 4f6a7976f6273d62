/// Button widget - "[ Title ]"
///
/// Submit and reset buttons do not carry callbacks; activating one raises the
/// matching form-level event, which the form handles.

use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::form::FormEvent;
use super::{focus_style, RenderableWidget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Submit,
    Reset,
    Other,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub title: String,
    pub kind: ButtonKind,
    pub focused: bool,
}

impl Button {
    pub fn new(title: impl Into<String>, kind: ButtonKind) -> Self {
        Self {
            title: title.into(),
            kind,
            focused: false,
        }
    }

    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Form event raised by one activation
    pub fn activate(&self) -> Option<FormEvent> {
        match self.kind {
            ButtonKind::Submit => Some(FormEvent::Submit),
            ButtonKind::Reset => Some(FormEvent::Reset),
            ButtonKind::Other => None,
        }
    }

    fn label(&self) -> String {
        format!("[ {} ]", self.title)
    }
}

impl RenderableWidget for Button {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let mut style = focus_style(self.focused, config);
        if self.kind == ButtonKind::Submit {
            style = style.add_modifier(Modifier::BOLD);
        }
        buf.set_stringn(area.x, area.y, self.label(), area.width as usize, style);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(self.label().width() as u16)
    }
}
