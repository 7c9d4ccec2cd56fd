//! Lifecycle events and the per-picker listener registry.
use std::{collections::HashMap, fmt, sync::Arc};

use crate::{date::CalendarDate, view::CalendarView};

/// Names of the picker lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerEventKind {
    /// A date was selected.
    Select,
    /// The picker became visible.
    Open,
    /// The picker was hidden.
    Close,
    /// The picker produced a new view.
    Draw,
}

/// A lifecycle event with its payload.
#[derive(Debug, Clone, Copy)]
pub enum PickerEvent<'a> {
    /// A date was selected.
    Select(CalendarDate),
    /// The picker became visible.
    Open,
    /// The picker was hidden.
    Close,
    /// The picker produced a new view.
    Draw(&'a CalendarView),
}

impl PickerEvent<'_> {
    /// Returns the event's name.
    pub fn kind(&self) -> PickerEventKind {
        match self {
            PickerEvent::Select(_) => PickerEventKind::Select,
            PickerEvent::Open => PickerEventKind::Open,
            PickerEvent::Close => PickerEventKind::Close,
            PickerEvent::Draw(_) => PickerEventKind::Draw,
        }
    }
}

/// Shared handle to a lifecycle listener.
///
/// Listeners compare by identity.
#[derive(Clone)]
pub struct Listener {
    handler: Arc<dyn Fn(&PickerEvent<'_>) + Send + Sync>,
}

impl Listener {
    /// Create a listener from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&PickerEvent<'_>) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the listener.
    pub fn call(&self, event: &PickerEvent<'_>) {
        (self.handler)(event)
    }
}

impl<F> From<F> for Listener
where
    F: Fn(&PickerEvent<'_>) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").finish_non_exhaustive()
    }
}

/// Ordered listeners per lifecycle event.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    by_kind: HashMap<PickerEventKind, Vec<Listener>>,
}

impl Listeners {
    /// Appends a listener for `kind`.
    pub fn on(&mut self, kind: PickerEventKind, listener: impl Into<Listener>) {
        self.by_kind.entry(kind).or_default().push(listener.into());
    }

    /// Removes one listener; returns true when it was registered.
    pub fn off(&mut self, kind: PickerEventKind, listener: &Listener) -> bool {
        let Some(listeners) = self.by_kind.get_mut(&kind) else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|registered| registered != listener);
        before != listeners.len()
    }

    /// Removes every listener for `kind`.
    pub fn clear(&mut self, kind: PickerEventKind) {
        self.by_kind.remove(&kind);
    }

    /// Removes every listener.
    pub fn clear_all(&mut self) {
        self.by_kind.clear();
    }

    /// Returns the number of listeners for `kind`.
    pub fn count(&self, kind: PickerEventKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }

    /// Calls the event's listeners in registration order.
    pub fn emit(&self, event: &PickerEvent<'_>) {
        if let Some(listeners) = self.by_kind.get(&event.kind()) {
            for listener in listeners {
                listener.call(event);
            }
        }
    }
}
