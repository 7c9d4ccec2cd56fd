//! A host-owned registry of pickers on one page.
//!
//! Opening a picker through the registry closes every other open one.
//!
//! ## Usage
//!
//! ```
//! use pika_ui::{DatePicker, PickerOptions, registry::PickerRegistry};
//!
//! let mut registry = PickerRegistry::new();
//! let first = registry.register(DatePicker::new(PickerOptions::default()));
//! let second = registry.register(DatePicker::new(PickerOptions::default()));
//! registry.open(second);
//! assert_eq!(registry.visible_ids(), vec![second]);
//! # let _ = first;
//! ```
use std::{collections::BTreeMap, fmt, sync::Arc};

use parking_lot::Mutex;
use tracing::debug;

use crate::picker::DatePicker;

/// Shared handle to a registered picker.
pub type PickerHandle = Arc<Mutex<DatePicker>>;

/// Identifier assigned by [`PickerRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickerId(u64);

impl fmt::Display for PickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "picker-{}", self.0)
    }
}

/// Registered pickers keyed by id, in registration order.
#[derive(Default)]
pub struct PickerRegistry {
    next_id: u64,
    pickers: BTreeMap<PickerId, PickerHandle>,
}

impl PickerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `picker` and returns its id.
    pub fn register(&mut self, picker: DatePicker) -> PickerId {
        self.insert(Arc::new(Mutex::new(picker)))
    }

    /// Registers an existing shared handle.
    pub fn insert(&mut self, handle: PickerHandle) -> PickerId {
        let id = PickerId(self.next_id);
        self.next_id += 1;
        self.pickers.insert(id, handle);
        debug!(%id, "picker registered");
        id
    }

    /// Returns the handle for `id`.
    pub fn get(&self, id: PickerId) -> Option<PickerHandle> {
        self.pickers.get(&id).cloned()
    }

    /// Number of registered pickers.
    pub fn len(&self) -> usize {
        self.pickers.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.pickers.is_empty()
    }

    /// Shows `id` after hiding every other visible picker.
    ///
    /// Returns false for an unknown id.
    pub fn open(&self, id: PickerId) -> bool {
        let Some(target) = self.pickers.get(&id) else {
            return false;
        };
        for (other_id, handle) in &self.pickers {
            if *other_id == id {
                continue;
            }
            let mut picker = handle.lock();
            if picker.is_visible() {
                debug!(closing = %other_id, opening = %id, "closing sibling picker");
                picker.hide();
            }
        }
        target.lock().show();
        true
    }

    /// Hides `id`; returns false for an unknown id.
    pub fn close(&self, id: PickerId) -> bool {
        match self.pickers.get(&id) {
            Some(handle) => {
                handle.lock().hide();
                true
            }
            None => false,
        }
    }

    /// Unregisters and destroys `id`, returning its handle.
    pub fn remove(&mut self, id: PickerId) -> Option<PickerHandle> {
        let handle = self.pickers.remove(&id)?;
        handle.lock().destroy();
        debug!(%id, "picker removed");
        Some(handle)
    }

    /// Ids of the currently visible pickers.
    pub fn visible_ids(&self) -> Vec<PickerId> {
        self.pickers
            .iter()
            .filter(|(_, handle)| handle.lock().is_visible())
            .map(|(id, _)| *id)
            .collect()
    }
}

impl fmt::Debug for PickerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerRegistry")
            .field("pickers", &self.pickers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{field::BoundField, options::PickerOptions};

    fn bound_picker() -> DatePicker {
        DatePicker::new(PickerOptions::default().field(BoundField::new("")))
    }

    #[test]
    fn test_open_closes_siblings() {
        let mut registry = PickerRegistry::new();
        let a = registry.register(bound_picker());
        let b = registry.register(bound_picker());
        let c = registry.register(bound_picker());
        assert!(registry.visible_ids().is_empty());

        registry.open(a);
        assert_eq!(registry.visible_ids(), vec![a]);
        registry.open(c);
        assert_eq!(registry.visible_ids(), vec![c]);
        registry.close(c);
        assert!(registry.visible_ids().is_empty());
        assert!(!registry.open(PickerId(99)));
        let _ = b;
    }

    #[test]
    fn test_remove_destroys() {
        let mut registry = PickerRegistry::new();
        let id = registry.register(bound_picker());
        registry.open(id);
        let handle = registry.remove(id).unwrap();
        assert!(!handle.lock().is_visible());
        assert!(handle.lock().field().is_none());
        assert!(registry.get(id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_shared_handle() {
        let mut registry = PickerRegistry::new();
        let handle: PickerHandle = Arc::new(Mutex::new(bound_picker()));
        let id = registry.insert(handle.clone());
        registry.open(id);
        assert!(handle.lock().is_visible());
        assert_eq!(id.to_string(), "picker-0");
    }
}
