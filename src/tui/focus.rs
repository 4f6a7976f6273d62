/// Keyboard focus within the settings panel
///
/// Focus and dropdown expansion are interaction state of the widgets, kept
/// apart from the form's visibility and draft.
use crate::article::ArticleField;

/// A focusable control of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormControl {
    Field(ArticleField),
    ResetButton,
    ApplyButton,
}

impl FormControl {
    /// Focus order, matching the order controls are rendered in
    pub const ORDER: [FormControl; 7] = [
        FormControl::Field(ArticleField::FontFamily),
        FormControl::Field(ArticleField::FontSize),
        FormControl::Field(ArticleField::FontColor),
        FormControl::Field(ArticleField::BackgroundColor),
        FormControl::Field(ArticleField::ContentWidth),
        FormControl::ResetButton,
        FormControl::ApplyButton,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|control| *control == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Fields edited through a radio group rather than a dropdown
    pub fn is_radio(self) -> bool {
        self == FormControl::Field(ArticleField::FontSize)
    }

    /// Field edited through a dropdown, if this control is one
    pub fn dropdown_field(self) -> Option<ArticleField> {
        match self {
            FormControl::Field(field) if !self.is_radio() => Some(field),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormFocus {
    pub focused: FormControl,
    /// Highlighted row of the focused dropdown while it is expanded
    pub expanded: Option<usize>,
}

impl Default for FormFocus {
    fn default() -> Self {
        Self {
            focused: FormControl::ORDER[0],
            expanded: None,
        }
    }
}

impl FormFocus {
    pub fn is_expanded(&self) -> bool {
        self.expanded.is_some()
    }

    pub fn focus(&mut self, control: FormControl) {
        if self.focused != control {
            self.collapse();
        }
        self.focused = control;
    }

    pub fn focus_next(&mut self) {
        self.focus(self.focused.next());
    }

    pub fn focus_previous(&mut self) {
        self.focus(self.focused.previous());
    }

    /// Expand the focused dropdown with `highlighted` as the active row
    ///
    /// Does nothing unless a dropdown has focus.
    pub fn expand(&mut self, highlighted: usize) {
        if self.focused.dropdown_field().is_some() {
            self.expanded = Some(highlighted);
        }
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Move the highlight by `delta`, staying within `len` rows
    pub fn move_highlight(&mut self, delta: isize, len: usize) {
        if let Some(highlighted) = self.expanded {
            let last = len.saturating_sub(1) as isize;
            self.expanded = Some((highlighted as isize + delta).clamp(0, last) as usize);
        }
    }
}
