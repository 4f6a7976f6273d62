/// RadioGroup widget - a titled row of mutually exclusive options
///
/// Every option is visible at once: "◉ 18px  ○ 25px  ○ 38px".

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::article::ArticleOption;
use crate::config::DisplayConfig;
use super::{selection_style, RenderableWidget};

pub const RADIO_GROUP_HEIGHT: u16 = 2;

/// Blank columns between two options
const OPTION_GAP: u16 = 2;

#[derive(Debug, Clone, Copy)]
pub struct RadioGroup {
    pub title: &'static str,
    pub options: &'static [ArticleOption],
    pub selected: ArticleOption,
    pub focused: bool,
}

impl RadioGroup {
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

    fn label(option: &ArticleOption, selected: bool, config: &DisplayConfig) -> String {
        let chars = config.box_chars();
        let mark = if selected { chars.radio_on } else { chars.radio_off };
        format!("{} {}", mark, option.title)
    }

    /// Screen cell span of each option for a group rendered into `area`
    ///
    /// Options that do not fit are left out.
    pub fn option_areas(&self, area: Rect, config: &DisplayConfig) -> Vec<Rect> {
        let mut areas = Vec::with_capacity(self.options.len());
        if area.height < RADIO_GROUP_HEIGHT {
            return areas;
        }
        let mut x = area.x;
        for option in self.options {
            let width = Self::label(option, false, config).width() as u16;
            if x + width > area.right() {
                break;
            }
            areas.push(Rect::new(x, area.y + 1, width, 1));
            x += width + OPTION_GAP;
        }
        areas
    }

    /// The change a pick of `index` reports; `None` for the current option
    pub fn pick(&self, index: usize) -> Option<ArticleOption> {
        self.options
            .get(index)
            .copied()
            .filter(|option| *option != self.selected)
    }

    /// Move the selection by `delta` positions, wrapping around
    pub fn cycle(&self, delta: isize) -> Option<ArticleOption> {
        if self.options.is_empty() {
            return None;
        }
        let current = self
            .options
            .iter()
            .position(|option| *option == self.selected)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(self.options.len() as isize) as usize;
        self.pick(next)
    }
}

impl RenderableWidget for RadioGroup {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height < RADIO_GROUP_HEIGHT || area.width == 0 {
            return;
        }

        buf.set_stringn(
            area.x,
            area.y,
            self.title,
            area.width as usize,
            Style::default().add_modifier(Modifier::DIM),
        );

        for (option, option_area) in self.options.iter().zip(self.option_areas(area, config)) {
            let selected = *option == self.selected;
            buf.set_string(
                option_area.x,
                option_area.y,
                Self::label(option, selected, config),
                selection_style(selected, self.focused, config),
            );
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(RADIO_GROUP_HEIGHT)
    }
}
