/// Screen geometry and the hit regions recorded by the last draw
use ratatui::layout::{Position, Rect};

use super::focus::FormControl;
use super::widgets::arrow_button::ARROW_BUTTON_SIZE;
use super::widgets::ListModalLayout;
use crate::form::Visibility;

pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Where each top-level element goes for a given terminal size
///
/// The panel slides in over the left edge of the article; the toggle control
/// sits just right of the panel, or at the left edge while it is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub toggle: Rect,
    pub panel: Option<Rect>,
    pub article: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, visibility: Visibility, panel_width: u16) -> Self {
        let status_height = STATUS_BAR_HEIGHT.min(area.height);
        let body = Rect {
            height: area.height - status_height,
            ..area
        };
        let status = Rect::new(area.x, body.bottom(), area.width, status_height);

        let panel = visibility
            .is_open()
            .then(|| Rect::new(body.x, body.y, panel_width.min(body.width), body.height));

        let toggle_x = panel.map_or(body.x, |panel| panel.right());
        let toggle = Rect::new(toggle_x, body.y, ARROW_BUTTON_SIZE, ARROW_BUTTON_SIZE).intersection(body);

        let article_x = (body.x + ARROW_BUTTON_SIZE + 1).min(body.right());
        let article = Rect::new(article_x, body.y, body.right() - article_x, body.height);

        Self {
            toggle,
            panel,
            article,
            status,
        }
    }
}

/// Hit regions of the rendered panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelLayout {
    pub area: Rect,
    /// Area of every rendered control, in focus order
    pub controls: Vec<(FormControl, Rect)>,
    /// One rect per visible radio option
    pub radio_options: Vec<Rect>,
    /// The expanded dropdown list, drawn over the other controls
    pub dropdown: Option<ListModalLayout>,
}

impl PanelLayout {
    pub fn control_at(&self, position: Position) -> Option<FormControl> {
        self.controls
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(control, _)| *control)
    }

    pub fn control_area(&self, control: FormControl) -> Option<Rect> {
        self.controls
            .iter()
            .find(|(candidate, _)| *candidate == control)
            .map(|(_, area)| *area)
    }

    pub fn radio_option_at(&self, position: Position) -> Option<usize> {
        self.radio_options.iter().position(|area| area.contains(position))
    }

    pub fn dropdown_row_at(&self, position: Position) -> Option<usize> {
        self.dropdown
            .as_ref()
            .and_then(|dropdown| dropdown.option_at(position))
    }
}

/// Everything the last draw put on screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameLayout {
    pub screen: ScreenLayout,
    pub panel: Option<PanelLayout>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleField;

    #[test]
    fn test_closed_layout() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24), Visibility::Closed, 44);

        assert_eq!(layout.panel, None);
        assert_eq!(layout.toggle, Rect::new(0, 0, 3, 3));
        assert_eq!(layout.article, Rect::new(4, 0, 76, 22));
        assert_eq!(layout.status, Rect::new(0, 22, 80, 2));
    }

    #[test]
    fn test_open_layout_puts_toggle_beside_panel() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24), Visibility::Open, 44);

        assert_eq!(layout.panel, Some(Rect::new(0, 0, 44, 22)));
        assert_eq!(layout.toggle, Rect::new(44, 0, 3, 3));
        assert_eq!(layout.article, Rect::new(4, 0, 76, 22));
    }

    #[test]
    fn test_panel_never_exceeds_screen() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 30, 10), Visibility::Open, 44);

        assert_eq!(layout.panel, Some(Rect::new(0, 0, 30, 8)));
        assert_eq!(layout.toggle.width, 0);
    }

    #[test]
    fn test_tiny_screen() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 2, 1), Visibility::Closed, 44);

        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.article.width, 0);
    }

    #[test]
    fn test_panel_hit_testing() {
        let font = FormControl::Field(ArticleField::FontFamily);
        let layout = PanelLayout {
            area: Rect::new(0, 0, 20, 20),
            controls: vec![
                (font, Rect::new(2, 3, 16, 2)),
                (FormControl::ApplyButton, Rect::new(2, 10, 9, 1)),
            ],
            radio_options: vec![Rect::new(2, 6, 6, 1), Rect::new(10, 6, 6, 1)],
            dropdown: None,
        };

        assert_eq!(layout.control_at(Position::new(5, 4)), Some(font));
        assert_eq!(layout.control_at(Position::new(5, 10)), Some(FormControl::ApplyButton));
        assert_eq!(layout.control_at(Position::new(5, 8)), None);
        assert_eq!(layout.control_area(font), Some(Rect::new(2, 3, 16, 2)));
        assert_eq!(layout.radio_option_at(Position::new(11, 6)), Some(1));
        assert_eq!(layout.dropdown_row_at(Position::new(5, 4)), None);
    }
}
