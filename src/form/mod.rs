//! Article parameters panel controller
//!
//! `ArticleParamsForm` owns two independent pieces of state: whether the panel
//! is open, and the draft `ArticleState` being edited. Widgets report edits
//! through [`ArticleParamsForm::set_field`]; the two buttons end up in
//! [`ArticleParamsForm::submit_apply`] and [`ArticleParamsForm::submit_reset`],
//! which notify the document owner through the callbacks given at construction.
//!
//! While the panel is open the controller listens to document-level
//! pointer-downs and closes itself when one lands outside the panel. The
//! listener is attached on every transition into `Open` and released on every
//! transition out of it, and when the controller is dropped.

pub mod document;

pub use document::{DocumentEvents, ElementRef, ListenerHandle, PointerDown};

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use crate::article::{ArticleField, ArticleOption, ArticleState};
use crate::catalog::DEFAULT_ARTICLE_STATE;

/// Panel visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Form-level events raised by submit and reset buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Reset,
}

/// Why the panel changed visibility (for logging)
#[derive(Debug, Clone, Copy)]
enum Cause {
    Toggle,
    OutsidePointerDown,
    Apply,
    Reset,
}

struct Shared {
    visibility: Visibility,
    draft: ArticleState,
    outside_listener: Option<ListenerHandle>,
}

/// Read-only view of the controller's state
///
/// Cheap to clone. Callbacks may hold one to observe the controller while
/// they run.
#[derive(Clone)]
pub struct FormView {
    shared: Rc<RefCell<Shared>>,
}

impl FormView {
    pub fn visibility(&self) -> Visibility {
        self.shared.borrow().visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility().is_open()
    }

    pub fn draft(&self) -> ArticleState {
        self.shared.borrow().draft
    }
}

pub type ApplyCallback = Box<dyn FnMut(ArticleState)>;
pub type ResetCallback = Box<dyn FnMut()>;

/// The settings panel controller
pub struct ArticleParamsForm {
    shared: Rc<RefCell<Shared>>,
    document: DocumentEvents,
    panel_ref: ElementRef,
    on_apply: ApplyCallback,
    on_reset: ResetCallback,
}

impl ArticleParamsForm {
    /// Create a closed panel whose draft is the default configuration
    ///
    /// `on_apply` receives a snapshot of the draft when the user applies.
    /// `on_reset` is called with no arguments when the user resets; the
    /// receiver restores its own notion of defaults.
    pub fn new<A, R>(document: DocumentEvents, on_apply: A, on_reset: R) -> Self
    where
        A: FnMut(ArticleState) + 'static,
        R: FnMut() + 'static,
    {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                visibility: Visibility::Closed,
                draft: DEFAULT_ARTICLE_STATE,
                outside_listener: None,
            })),
            document,
            panel_ref: ElementRef::new(),
            on_apply: Box::new(on_apply),
            on_reset: Box::new(on_reset),
        }
    }

    pub fn view(&self) -> FormView {
        FormView {
            shared: Rc::clone(&self.shared),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.shared.borrow().visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility().is_open()
    }

    pub fn draft(&self) -> ArticleState {
        self.shared.borrow().draft
    }

    /// Region the panel was last rendered into
    ///
    /// The view sets this on every frame; outside-dismissal tests against it.
    pub fn panel_ref(&self) -> &ElementRef {
        &self.panel_ref
    }

    /// True while the outside-dismissal listener is attached
    pub fn is_listening(&self) -> bool {
        self.shared.borrow().outside_listener.is_some()
    }

    /// Flip visibility (toggle control activation)
    pub fn toggle(&mut self) {
        let next = self.visibility().toggled();
        self.transition(next, Cause::Toggle);
    }

    /// Replace one field of the draft
    pub fn set_field(&mut self, field: ArticleField, option: ArticleOption) {
        let mut shared = self.shared.borrow_mut();
        shared.draft = shared.draft.with_field(field, option);
        debug!("FORM: {} -> {}", field.key(), option.value);
    }

    /// Hand a snapshot of the draft to `on_apply`, then close
    ///
    /// The draft is kept, so reopening shows what was just applied.
    pub fn submit_apply(&mut self) {
        let snapshot = self.draft();
        info!("FORM: Applying {:?}", snapshot.diff(&DEFAULT_ARTICLE_STATE));
        (self.on_apply)(snapshot);
        self.transition(Visibility::Closed, Cause::Apply);
    }

    /// Restore the default draft, notify `on_reset`, then close
    pub fn submit_reset(&mut self) {
        self.shared.borrow_mut().draft = DEFAULT_ARTICLE_STATE;
        info!("FORM: Reset to defaults");
        (self.on_reset)();
        self.transition(Visibility::Closed, Cause::Reset);
    }

    /// Handle a submit or reset raised by one of the form's buttons
    pub fn handle_form_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::Submit => self.submit_apply(),
            FormEvent::Reset => self.submit_reset(),
        }
    }

    fn transition(&mut self, next: Visibility, cause: Cause) {
        transition(&self.shared, next, cause, &self.document, &self.panel_ref);
    }
}

impl fmt::Debug for ArticleParamsForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("ArticleParamsForm")
            .field("visibility", &shared.visibility)
            .field("draft", &shared.draft)
            .field("listening", &shared.outside_listener.is_some())
            .finish()
    }
}

/// Move to `next`, attaching or releasing the outside listener on the way
fn transition(
    shared: &Rc<RefCell<Shared>>,
    next: Visibility,
    cause: Cause,
    document: &DocumentEvents,
    panel_ref: &ElementRef,
) {
    let released = {
        let mut state = shared.borrow_mut();
        if state.visibility == next {
            return;
        }
        debug!("FORM: {:?} -> {:?} ({:?})", state.visibility, next, cause);
        state.visibility = next;
        match next {
            Visibility::Open => {
                state.outside_listener =
                    Some(listen_outside(Rc::downgrade(shared), document, panel_ref));
                None
            }
            Visibility::Closed => state.outside_listener.take(),
        }
    };
    drop(released);
}

fn listen_outside(
    shared: Weak<RefCell<Shared>>,
    document: &DocumentEvents,
    panel_ref: &ElementRef,
) -> ListenerHandle {
    let listener_document = document.clone();
    let panel_ref = panel_ref.clone();
    document.add_pointer_down_listener(move |event| {
        let Some(shared) = shared.upgrade() else {
            return;
        };
        if panel_ref.contains(event.position()) == Some(false) {
            transition(
                &shared,
                Visibility::Closed,
                Cause::OutsidePointerDown,
                &listener_document,
                &panel_ref,
            );
        }
    })
}
