/// Connects user input to the form and the widget focus
///
/// Widgets only report what the user chose; this module turns those reports
/// into form operations (`set_field`, form events, `toggle`) and keeps the
/// widget focus consistent with the panel's visibility.
use tracing::debug;

use super::action::Action;
use super::components::params_panel::{apply_button, radio_for, reset_button, select_for};
use super::focus::{FormControl, FormFocus};
use super::layout::FrameLayout;
use crate::article::ArticleField;
use crate::form::{ArticleParamsForm, DocumentEvents, PointerDown};

/// What a pointer-down ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Landed outside the open panel and closed it; nothing else sees the gesture
    Dismissed,
    Toggled,
    Control(FormControl),
    Ignored,
}

pub fn handle_panel_action(
    action: Action,
    form: &mut ArticleParamsForm,
    focus: &mut FormFocus,
    document: &DocumentEvents,
    frame: &FrameLayout,
) {
    match action {
        Action::TogglePanel => form.toggle(),
        Action::FocusNext => focus.focus_next(),
        Action::FocusPrevious => focus.focus_previous(),
        Action::Activate => activate(form, focus),
        Action::HighlightPrevious => move_highlight(focus, -1),
        Action::HighlightNext => move_highlight(focus, 1),
        Action::SelectPrevious => cycle(form, focus, -1),
        Action::SelectNext => cycle(form, focus, 1),
        Action::CollapseDropdown => focus.collapse(),
        Action::PointerDown(event) => {
            let outcome = pointer_down(&event, form, focus, document, frame);
            debug!("POINTER: ({}, {}) -> {:?}", event.column, event.row, outcome);
        }
        other => debug!("WIRING: {:?} is not a panel action", other),
    }

    // A closed panel has no expanded dropdown
    if !form.is_open() {
        focus.collapse();
    }
}

fn move_highlight(focus: &mut FormFocus, delta: isize) {
    if let Some(field) = focus.focused.dropdown_field() {
        focus.move_highlight(delta, field.catalog().len());
    }
}

fn press(form: &mut ArticleParamsForm, control: FormControl) {
    let event = match control {
        FormControl::ResetButton => reset_button(true).activate(),
        FormControl::ApplyButton => apply_button(true).activate(),
        FormControl::Field(_) => None,
    };
    if let Some(event) = event {
        form.handle_form_event(event);
    }
}

/// Pick row `index` of the expanded dropdown for `field`
fn pick_from_dropdown(form: &mut ArticleParamsForm, focus: &mut FormFocus, field: ArticleField, index: usize) {
    if let Some(option) = select_for(field, &form.draft()).pick(index) {
        form.set_field(field, option);
    }
    focus.collapse();
}

/// Enter/Space on the focused control
pub fn activate(form: &mut ArticleParamsForm, focus: &mut FormFocus) {
    let control = focus.focused;
    match control {
        FormControl::ResetButton | FormControl::ApplyButton => press(form, control),
        FormControl::Field(_) if control.is_radio() => cycle(form, focus, 1),
        FormControl::Field(field) => match focus.expanded {
            Some(highlighted) => pick_from_dropdown(form, focus, field, highlighted),
            None => focus.expand(select_for(field, &form.draft()).selected_index()),
        },
    }
}

/// Left/Right on the focused radio group
pub fn cycle(form: &mut ArticleParamsForm, focus: &FormFocus, delta: isize) {
    let control = focus.focused;
    if let (FormControl::Field(field), true) = (control, control.is_radio()) {
        if let Some(option) = radio_for(field, &form.draft()).cycle(delta) {
            form.set_field(field, option);
        }
    }
}

/// Route one pointer-down
///
/// Document listeners see it first. If that closed the panel the gesture is
/// consumed, so a dismissing click on the toggle control does not reopen it.
pub fn pointer_down(
    event: &PointerDown,
    form: &mut ArticleParamsForm,
    focus: &mut FormFocus,
    document: &DocumentEvents,
    frame: &FrameLayout,
) -> PointerOutcome {
    let was_open = form.is_open();
    document.dispatch_pointer_down(event);
    if was_open && !form.is_open() {
        focus.collapse();
        return PointerOutcome::Dismissed;
    }

    let position = event.position();
    if frame.screen.toggle.contains(position) {
        form.toggle();
        return PointerOutcome::Toggled;
    }

    let Some(panel) = frame.panel.as_ref().filter(|_| form.is_open()) else {
        return PointerOutcome::Ignored;
    };

    let was_expanded = focus.is_expanded();
    if let Some(dropdown) = &panel.dropdown {
        if let (Some(row), Some(field)) = (panel.dropdown_row_at(position), focus.focused.dropdown_field()) {
            pick_from_dropdown(form, focus, field, row);
            return PointerOutcome::Control(FormControl::Field(field));
        }
        if dropdown.area.contains(position) {
            return PointerOutcome::Ignored;
        }
        focus.collapse();
    }

    if let Some(index) = panel.radio_option_at(position) {
        let control = FormControl::Field(ArticleField::FontSize);
        focus.focus(control);
        if let Some(option) = radio_for(ArticleField::FontSize, &form.draft()).pick(index) {
            form.set_field(ArticleField::FontSize, option);
        }
        return PointerOutcome::Control(control);
    }

    let Some(control) = panel.control_at(position) else {
        return PointerOutcome::Ignored;
    };
    let reopening = !(was_expanded && focus.focused == control);
    focus.focus(control);
    match control {
        FormControl::ResetButton | FormControl::ApplyButton => press(form, control),
        FormControl::Field(field) if reopening && !control.is_radio() => {
            focus.expand(select_for(field, &form.draft()).selected_index());
        }
        FormControl::Field(_) => {}
    }
    PointerOutcome::Control(control)
}
