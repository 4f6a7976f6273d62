/// Presentational widgets for the settings panel
///
/// Widgets are controlled: they render what they are given and report user
/// choices back through return values, never holding configuration state of
/// their own.

#[cfg(test)]
pub mod testing;

pub mod arrow_button;
pub mod button;
pub mod list_modal;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod status_bar;
pub mod text;

pub use arrow_button::ArrowButton;
pub use button::{Button, ButtonKind};
pub use list_modal::{render_list_modal, ListModalLayout};
pub use radio_group::RadioGroup;
pub use select::Select;
pub use separator::render_separator;
pub use status_bar::{KeyHint, StatusBar};
pub use text::Text;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use crate::article::ArticleOption;
use crate::config::{parse_color, DisplayConfig};

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}

/// Style for text that has keyboard focus
pub(crate) fn focus_style(focused: bool, config: &DisplayConfig) -> Style {
    if focused {
        Style::default().fg(config.selection_fg)
    } else {
        Style::default()
    }
}

/// Style for the selected option of a control, dimmed while the control is unfocused
pub(crate) fn selection_style(selected: bool, focused: bool, config: &DisplayConfig) -> Style {
    match (selected, focused) {
        (false, _) => Style::default(),
        (true, true) => Style::default().fg(config.selection_fg),
        (true, false) => Style::default().fg(config.unfocused_selection_fg()),
    }
}

/// Swatch color for options whose value is a color
pub(crate) fn swatch_color(option: &ArticleOption) -> Option<Color> {
    option.option_class_name?;
    parse_color(option.value)
}
