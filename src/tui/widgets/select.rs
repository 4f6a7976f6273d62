/// Select widget - a titled dropdown over a catalog of options
///
/// Renders two rows: the title, then the selected option behind a dropdown
/// marker. Color options get a swatch. The expanded list itself is drawn by
/// `render_list_modal` on top of everything else.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::article::ArticleOption;
use crate::config::DisplayConfig;
use super::{focus_style, swatch_color, RenderableWidget};

pub const SELECT_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy)]
pub struct Select {
    pub title: &'static str,
    pub options: &'static [ArticleOption],
    pub selected: ArticleOption,
    pub focused: bool,
}

impl Select {
    pub fn new(title: &'static str, options: &'static [ArticleOption], selected: ArticleOption) -> Self {
        Self {
            title,
            options,
            selected,
            focused: false,
        }
    }

    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Index of the selected option; the first option if it is not listed
    pub fn selected_index(&self) -> usize {
        self.options
            .iter()
            .position(|option| *option == self.selected)
            .unwrap_or(0)
    }

    /// The change a pick of `index` reports
    ///
    /// `None` when the index is out of range or names the current selection.
    pub fn pick(&self, index: usize) -> Option<ArticleOption> {
        self.options
            .get(index)
            .copied()
            .filter(|option| *option != self.selected)
    }

    /// Where the expanded list should open for a select rendered into `area`
    pub fn list_anchor(area: Rect) -> (u16, u16) {
        (area.x, area.y + SELECT_HEIGHT)
    }

    fn value_label(&self, config: &DisplayConfig) -> String {
        format!("{} {}", config.box_chars().dropdown, self.selected.title)
    }
}

impl RenderableWidget for Select {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height < SELECT_HEIGHT || area.width == 0 {
            return;
        }

        buf.set_stringn(
            area.x,
            area.y,
            self.title,
            area.width as usize,
            Style::default().add_modifier(Modifier::DIM),
        );

        let (end_x, _) = buf.set_stringn(
            area.x,
            area.y + 1,
            self.value_label(config),
            area.width as usize,
            focus_style(self.focused, config),
        );

        if let Some(color) = swatch_color(&self.selected) {
            let remaining = area.right().saturating_sub(end_x) as usize;
            buf.set_stringn(end_x, area.y + 1, " ██", remaining, Style::default().fg(color));
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(SELECT_HEIGHT)
    }

    fn preferred_width(&self) -> Option<u16> {
        let widest = self.options.iter().map(|o| o.title.width()).max().unwrap_or(0);
        Some(self.title.width().max(widest + 5) as u16)
    }
}
