/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions. What a key
/// does depends on whether the panel is open and whether a dropdown is
/// expanded.
use crossterm::event::{KeyCode, KeyEvent};
use tracing::trace;

use super::action::Action;
use super::focus::FormFocus;
use crate::form::FormView;

/// Handle global keys that work whether or not the panel is open
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::F(2) => Some(Action::TogglePanel),
        _ => None,
    }
}

/// Handle keys while a dropdown list is expanded
fn handle_expanded_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Up => Some(Action::HighlightPrevious),
        KeyCode::Down => Some(Action::HighlightNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Esc => Some(Action::CollapseDropdown),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrevious),
        _ => None,
    }
}

/// Handle keys moving between and operating the panel's controls
fn handle_panel_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrevious),
        KeyCode::Left => Some(Action::SelectPrevious),
        KeyCode::Right => Some(Action::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        _ => None,
    }
}

pub fn key_to_action(key: KeyEvent, form: &FormView, focus: &FormFocus) -> Option<Action> {
    trace!("KEY: {:?}", key);

    if let Some(action) = handle_global_keys(key.code) {
        return Some(action);
    }

    if !form.is_open() {
        return None;
    }

    if focus.is_expanded() {
        handle_expanded_keys(key.code)
    } else {
        handle_panel_keys(key.code)
    }
}
