use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::components::render_app;
use super::focus::FormFocus;
use super::keys::key_to_action;
use super::layout::FrameLayout;
use super::reducer::reduce;
use super::state::AppState;
use super::wiring::handle_panel_action;
use crate::form::{ArticleParamsForm, DocumentEvents, PointerDown};

/// Runtime - owns everything the event loop works with
///
/// The Runtime is responsible for:
/// - Managing the application (document owner) state
/// - Owning the settings form and the document event registry it listens on
/// - Routing panel actions to the form and host actions through the reducer
/// - Remembering the last frame's hit regions for mouse input
pub struct Runtime {
    /// Current application state
    state: AppState,

    form: ArticleParamsForm,
    document: DocumentEvents,
    focus: FormFocus,

    /// Hit regions from the most recent draw
    frame: FrameLayout,

    /// Channel for dispatching actions; the form's callbacks feed into it
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let document = DocumentEvents::new();

        let apply_tx = action_tx.clone();
        let reset_tx = action_tx.clone();
        let form = ArticleParamsForm::new(
            document.clone(),
            move |article| {
                let _ = apply_tx.send(Action::ArticleApplied(article));
            },
            move || {
                let _ = reset_tx.send(Action::ArticleReset);
            },
        );

        Self {
            state: initial_state,
            form,
            document,
            focus: FormFocus::default(),
            frame: FrameLayout::default(),
            action_tx,
            action_rx,
            should_quit: false,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn form(&self) -> &ArticleParamsForm {
        &self.form
    }

    pub fn focus(&self) -> &FormFocus {
        &self.focus
    }

    pub fn frame(&self) -> &FrameLayout {
        &self.frame
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatch an action
    ///
    /// Panel actions run against the form immediately. Everything else goes
    /// through the reducer, using mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        if action.is_panel_action() {
            handle_panel_action(action, &mut self.form, &mut self.focus, &self.document, &self.frame);
            return;
        }

        if matches!(action, Action::Quit) {
            debug!("ACTION: Quit requested");
            self.should_quit = true;
        }

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;
        effect.execute(&self.action_tx);
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Convert a key press to an action and dispatch it
    ///
    /// Returns true if the key did something.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key_to_action(key, &self.form.view(), &self.focus) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    pub fn handle_pointer_down(&mut self, column: u16, row: u16) {
        self.dispatch(Action::PointerDown(PointerDown::new(column, row)));
    }

    /// Render the current state and remember where everything went
    pub fn draw(&mut self, area: Rect, buf: &mut Buffer) {
        self.frame = render_app(
            area,
            buf,
            &self.state,
            &self.form.view(),
            &self.focus,
            self.form.panel_ref(),
        );
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }
}
