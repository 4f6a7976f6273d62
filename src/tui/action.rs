use crate::article::ArticleState;
use crate::form::PointerDown;

/// Global actions - like Redux actions
///
/// All changes happen through actions. Actions are dispatched from:
/// - User input (key and mouse events)
/// - The panel's apply and reset callbacks
/// - Effects returned by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Panel interaction, handled against the form and widget focus
    TogglePanel,
    FocusNext,
    FocusPrevious,
    /// Enter/Space on the focused control
    Activate,
    HighlightPrevious,
    HighlightNext,
    /// Left/Right on a radio group
    SelectPrevious,
    SelectNext,
    CollapseDropdown,
    PointerDown(PointerDown),

    // Host state, handled by the reducer
    ArticleApplied(ArticleState),
    ArticleReset,
    SetStatusMessage { message: String, is_error: bool },

    Quit,
}

impl Action {
    /// True for actions that target the panel rather than the host state
    pub fn is_panel_action(&self) -> bool {
        matches!(
            self,
            Action::TogglePanel
                | Action::FocusNext
                | Action::FocusPrevious
                | Action::Activate
                | Action::HighlightPrevious
                | Action::HighlightNext
                | Action::SelectPrevious
                | Action::SelectNext
                | Action::CollapseDropdown
                | Action::PointerDown(_)
        )
    }
}
