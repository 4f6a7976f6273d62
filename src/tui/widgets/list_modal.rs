/// List modal - the expanded list of a dropdown
///
/// Features:
/// - Positioned at the given coordinates, clamped inside `bounds`
/// - Clear background behind modal
/// - Selection indicator on the highlighted option
/// - Scrolls so the highlighted option stays visible when clipped
/// - Color swatch next to color options
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::article::ArticleOption;
use crate::config::DisplayConfig;
use super::{focus_style, selection_style, swatch_color};

/// Where the modal and each of its visible option rows ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListModalLayout {
    pub area: Rect,
    /// Index of the option drawn in the first row
    pub scroll_offset: usize,
    /// One rect per visible option, in option order
    pub rows: Vec<Rect>,
}

impl ListModalLayout {
    /// Option index under `position`, accounting for the scroll offset
    pub fn option_at(&self, position: Position) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.contains(position))
            .map(|row| row + self.scroll_offset)
    }
}

const SWATCH: &str = " ██";

/// Renders a list of options as a bordered modal
///
/// `highlighted` carries the selection indicator and the selection color;
/// `current` is drawn in the unfocused selection color when not highlighted.
#[allow(clippy::too_many_arguments)]
pub fn render_list_modal(
    options: &[ArticleOption],
    highlighted: usize,
    current: Option<usize>,
    position_x: u16,
    position_y: u16,
    bounds: Rect,
    buf: &mut Buffer,
    config: &DisplayConfig,
) -> ListModalLayout {
    let has_swatches = options.iter().any(|option| swatch_color(option).is_some());
    let max_option_len = options.iter().map(|o| o.title.width()).max().unwrap_or(0) as u16;
    let swatch_width = if has_swatches { SWATCH.width() as u16 } else { 0 };

    // +2 borders, +3 selector column, +1 right margin
    let modal_width = (max_option_len + swatch_width + 6).min(bounds.width);
    let modal_height = (options.len() as u16 + 2).min(bounds.height);

    let modal_area = Rect {
        x: position_x
            .min(bounds.right().saturating_sub(modal_width))
            .max(bounds.x),
        y: position_y
            .min(bounds.bottom().saturating_sub(modal_height))
            .max(bounds.y),
        width: modal_width,
        height: modal_height,
    };

    Clear.render(modal_area, buf);
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default())
        .render(modal_area, buf);

    let inner = Rect {
        x: modal_area.x + 1,
        y: modal_area.y + 1,
        width: modal_area.width.saturating_sub(2),
        height: modal_area.height.saturating_sub(2),
    };

    let visible = inner.height as usize;
    let scroll_offset = if visible == 0 {
        0
    } else {
        highlighted
            .min(options.len().saturating_sub(1))
            .saturating_sub(visible - 1)
    };

    let chars = config.box_chars();
    let mut rows = Vec::new();
    let mut y = inner.y;

    for (idx, option) in options.iter().enumerate().skip(scroll_offset) {
        if y >= inner.bottom() {
            break;
        }

        let selector = if idx == highlighted {
            format!(" {} ", chars.selector)
        } else {
            "   ".to_string()
        };
        buf.set_stringn(inner.x, y, &selector, inner.width as usize, Style::default());

        let text_x = inner.x + 3;
        let text_width = inner.right().saturating_sub(text_x) as usize;
        let (end_x, _) = buf.set_stringn(
            text_x,
            y,
            option.title,
            text_width,
            if idx == highlighted {
                focus_style(true, config)
            } else {
                selection_style(current == Some(idx), false, config)
            },
        );

        if let Some(color) = swatch_color(option) {
            let remaining = inner.right().saturating_sub(end_x) as usize;
            buf.set_stringn(end_x, y, SWATCH, remaining, Style::default().fg(color));
        }

        rows.push(Rect::new(inner.x, y, inner.width, 1));
        y += 1;
    }

    ListModalLayout {
        area: modal_area,
        scroll_offset,
        rows,
    }
}
