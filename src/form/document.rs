/// Document-level pointer events
///
/// The runtime feeds every mouse-down on the screen into `DocumentEvents`,
/// which forwards it to whoever currently listens. Listeners are owned
/// through a `ListenerHandle`: dropping the handle detaches the listener.
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use ratatui::layout::{Position, Rect};
use tracing::trace;

/// A pointer-down anywhere on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
    pub column: u16,
    pub row: u16,
}

impl PointerDown {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    pub fn position(&self) -> Position {
        Position::new(self.column, self.row)
    }
}

type Listener = Rc<RefCell<dyn FnMut(&PointerDown)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Registry of document-level pointer-down listeners
#[derive(Clone, Default)]
pub struct DocumentEvents {
    registry: Rc<RefCell<Registry>>,
}

impl DocumentEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener; it stays attached for as long as the handle lives
    #[must_use = "dropping the handle detaches the listener"]
    pub fn add_pointer_down_listener<F>(&self, listener: F) -> ListenerHandle
    where
        F: FnMut(&PointerDown) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));
        trace!("DOCUMENT: Attached pointer-down listener {}", id);

        ListenerHandle {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Deliver a pointer-down to every listener attached at the time of the call
    ///
    /// Listeners may detach themselves (or others) while being called.
    pub fn dispatch_pointer_down(&self, event: &PointerDown) {
        let listeners: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            let mut listener = listener.borrow_mut();
            (&mut *listener)(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Owning handle for an attached listener
pub struct ListenerHandle {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl ListenerHandle {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
            trace!("DOCUMENT: Detached pointer-down listener {}", self.id);
        }
    }
}

/// Reference to the screen region an element was last rendered into
///
/// Empty until the element is rendered; cleared when it is no longer shown.
#[derive(Clone, Default)]
pub struct ElementRef {
    area: Rc<Cell<Option<Rect>>>,
}

impl ElementRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, area: Option<Rect>) {
        self.area.set(area);
    }

    pub fn get(&self) -> Option<Rect> {
        self.area.get()
    }

    /// `None` while the element is not mounted
    pub fn contains(&self, position: Position) -> Option<bool> {
        self.area.get().map(|area| area.contains(position))
    }
}
