/// The settings panel: heading, five field controls, separator and buttons
///
/// Renders from the form's draft and the widget focus, records the panel's
/// root area in the form's element reference, and returns the hit regions of
/// everything it drew.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Clear, Widget},
};

use crate::article::{ArticleField, ArticleState};
use crate::config::DisplayConfig;
use crate::form::ElementRef;
use crate::formatting::BoxChars;
use crate::tui::focus::{FormControl, FormFocus};
use crate::tui::layout::PanelLayout;
use crate::tui::widgets::{
    render_list_modal, render_separator, Button, ButtonKind, RadioGroup, RenderableWidget, Select, Text,
};

pub const PANEL_TITLE: &str = "Set parameters";

/// Fields rendered above the separator
const UPPER_FIELDS: [ArticleField; 3] = [
    ArticleField::FontFamily,
    ArticleField::FontSize,
    ArticleField::FontColor,
];

/// Fields rendered below the separator
const LOWER_FIELDS: [ArticleField; 2] = [ArticleField::BackgroundColor, ArticleField::ContentWidth];

pub fn reset_button(focused: bool) -> Button {
    Button::new("Reset", ButtonKind::Reset).with_focused(focused)
}

pub fn apply_button(focused: bool) -> Button {
    Button::new("Apply", ButtonKind::Submit).with_focused(focused)
}

pub fn select_for(field: ArticleField, draft: &ArticleState) -> Select {
    Select::new(field.title(), field.catalog(), field.get(draft))
}

pub fn radio_for(field: ArticleField, draft: &ArticleState) -> RadioGroup {
    RadioGroup::new(field.title(), field.catalog(), field.get(draft))
}

/// Hands out rows top to bottom with one blank row between blocks
struct RowCursor {
    inner: Rect,
    y: u16,
}

impl RowCursor {
    fn take(&mut self, height: u16) -> Option<Rect> {
        if self.y + height > self.inner.bottom() {
            return None;
        }
        let rows = Rect::new(self.inner.x, self.y, self.inner.width, height);
        self.y += height + 1;
        Some(rows)
    }
}

fn draw_frame(area: Rect, buf: &mut Buffer, chars: &BoxChars) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let span = chars.horizontal.repeat(area.width as usize - 2);
    let style = Style::default();
    buf.set_string(area.x, area.y, format!("{}{}{}", chars.top_left, span, chars.top_right), style);
    buf.set_string(
        area.x,
        area.bottom() - 1,
        format!("{}{}{}", chars.bottom_left, span, chars.bottom_right),
        style,
    );
    for y in area.y + 1..area.bottom() - 1 {
        buf.set_string(area.x, y, &chars.vertical, style);
        buf.set_string(area.right() - 1, y, &chars.vertical, style);
    }
}

fn render_field(
    field: ArticleField,
    area: Rect,
    buf: &mut Buffer,
    draft: &ArticleState,
    focus: &FormFocus,
    config: &DisplayConfig,
    layout: &mut PanelLayout,
) {
    let control = FormControl::Field(field);
    let focused = focus.focused == control;
    if control.is_radio() {
        let group = radio_for(field, draft).with_focused(focused);
        group.render(area, buf, config);
        layout.radio_options = group.option_areas(area, config);
    } else {
        select_for(field, draft).with_focused(focused).render(area, buf, config);
    }
    layout.controls.push((control, area));
}

/// Draws the controls top to bottom, stopping at the first one that does not fit
fn render_controls(
    inner: Rect,
    buf: &mut Buffer,
    draft: &ArticleState,
    focus: &FormFocus,
    config: &DisplayConfig,
    layout: &mut PanelLayout,
) {
    let mut rows = RowCursor { inner, y: inner.y };

    if let Some(row) = rows.take(1) {
        Text::new(PANEL_TITLE).bold().uppercase().render(row, buf, config);
    }

    for field in UPPER_FIELDS {
        match rows.take(2) {
            Some(field_area) => render_field(field, field_area, buf, draft, focus, config, layout),
            None => return,
        }
    }

    if let Some(row) = rows.take(1) {
        render_separator(inner, row.y, buf, config);
    }

    for field in LOWER_FIELDS {
        match rows.take(2) {
            Some(field_area) => render_field(field, field_area, buf, draft, focus, config, layout),
            None => return,
        }
    }

    if let Some(row) = rows.take(1) {
        let reset = reset_button(focus.focused == FormControl::ResetButton);
        let apply = apply_button(focus.focused == FormControl::ApplyButton);
        let reset_width = reset.preferred_width().unwrap_or(0).min(row.width);
        let apply_width = apply.preferred_width().unwrap_or(0).min(row.width);

        let reset_area = Rect::new(row.x, row.y, reset_width, 1);
        let apply_area = Rect::new(row.right() - apply_width, row.y, apply_width, 1);
        reset.render(reset_area, buf, config);
        apply.render(apply_area, buf, config);
        layout.controls.push((FormControl::ResetButton, reset_area));
        layout.controls.push((FormControl::ApplyButton, apply_area));
    }
}

pub fn render_params_panel(
    area: Rect,
    buf: &mut Buffer,
    draft: &ArticleState,
    focus: &FormFocus,
    panel_ref: &ElementRef,
    config: &DisplayConfig,
) -> PanelLayout {
    panel_ref.set(Some(area));
    let mut layout = PanelLayout {
        area,
        ..PanelLayout::default()
    };

    Clear.render(area, buf);
    draw_frame(area, buf, &config.box_chars());

    let bounds = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    // One column of padding inside the frame
    let inner = Rect {
        x: bounds.x + 1,
        width: bounds.width.saturating_sub(2),
        ..bounds
    };
    render_controls(inner, buf, draft, focus, config, &mut layout);

    // The expanded list goes on top of whatever it overlaps
    if let (Some(highlighted), Some(field)) = (focus.expanded, focus.focused.dropdown_field()) {
        if let Some(select_area) = layout.control_area(focus.focused) {
            let (x, y) = Select::list_anchor(select_area);
            let current = field.position(&field.get(draft));
            layout.dropdown = Some(render_list_modal(
                field.catalog(),
                highlighted,
                current,
                x,
                y,
                bounds,
                buf,
                config,
            ));
        }
    }

    layout
}
