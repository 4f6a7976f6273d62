/// Separator widget - a horizontal rule between groups of controls

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use crate::config::DisplayConfig;

/// Renders a horizontal rule across `area` on row `y`
///
/// Returns 1 if rendered, 0 if no space available
pub fn render_separator(area: Rect, y: u16, buf: &mut Buffer, config: &DisplayConfig) -> u16 {
    if y < area.y || y >= area.bottom() {
        return 0;
    }

    let rule = config.box_chars().horizontal.repeat(area.width as usize);
    buf.set_string(area.x, y, &rule, Style::default().add_modifier(Modifier::DIM));
    1
}
