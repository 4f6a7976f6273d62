/// Root of the screen: article preview, settings panel, toggle control and status bar
use ratatui::{buffer::Buffer, layout::Rect};

use super::article_view::render_article;
use super::params_panel::render_params_panel;
use crate::form::{ElementRef, FormView};
use crate::tui::focus::FormFocus;
use crate::tui::layout::{FrameLayout, ScreenLayout};
use crate::tui::state::AppState;
use crate::tui::widgets::{ArrowButton, KeyHint, RenderableWidget, StatusBar};

fn key_hints(form: &FormView, focus: &FormFocus) -> Vec<KeyHint> {
    if !form.is_open() {
        vec![KeyHint::new("p", "Settings"), KeyHint::new("q", "Quit")]
    } else if focus.is_expanded() {
        vec![
            KeyHint::new("↑↓", "Move"),
            KeyHint::new("Enter", "Pick"),
            KeyHint::new("Esc", "Cancel"),
        ]
    } else {
        vec![
            KeyHint::new("Tab", "Next"),
            KeyHint::new("Enter", "Select"),
            KeyHint::new("p", "Close"),
        ]
    }
}

fn status_bar(state: &AppState, form: &FormView, focus: &FormFocus) -> StatusBar {
    let bar = StatusBar::new().with_hints(key_hints(form, focus));
    match &state.system.status_message {
        Some(message) if state.system.status_is_error => bar.with_error(message.clone()),
        Some(message) => bar.with_status(message.clone()),
        None => bar,
    }
}

/// Draw the whole screen and return what ended up where
///
/// `panel_ref` is pointed at the panel while it is shown and cleared otherwise.
pub fn render_app(
    area: Rect,
    buf: &mut Buffer,
    state: &AppState,
    form: &FormView,
    focus: &FormFocus,
    panel_ref: &ElementRef,
) -> FrameLayout {
    let config = &state.system.config.display;
    let screen = ScreenLayout::compute(area, form.visibility(), config.panel_width());

    render_article(screen.article, buf, &state.article, config);

    let panel = match screen.panel {
        Some(panel_area) => Some(render_params_panel(
            panel_area,
            buf,
            &form.draft(),
            focus,
            panel_ref,
            config,
        )),
        None => {
            panel_ref.set(None);
            None
        }
    };

    ArrowButton::new(form.is_open()).render(screen.toggle, buf, config);
    status_bar(state, form, focus).render(screen.status, buf, config);

    FrameLayout { screen, panel }
}
