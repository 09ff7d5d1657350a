use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::error::CaptureError;
use crate::overlay::catalog::{Overlay, OverlayCatalog};

/// The currently active overlay key.
///
/// Always a valid catalog key; mutated only by explicit user selection.
/// Shared between the UI thread and the capture pipeline, which snapshots
/// the value at the moment a capture starts.
pub struct SelectionState {
    catalog: Arc<OverlayCatalog>,
    current: Mutex<String>,
}

impl SelectionState {
    pub fn new(catalog: Arc<OverlayCatalog>) -> Self {
        let current = Mutex::new(catalog.default_overlay().id.clone());
        Self { catalog, current }
    }

    /// Replace the selection. Rejects keys absent from the catalog and
    /// leaves the prior selection in place.
    pub fn select(&self, id: &str) -> Result<(), CaptureError> {
        if !self.catalog.contains(id) {
            return Err(CaptureError::UnknownOverlay(id.to_string()));
        }
        *self.current.lock() = id.to_string();
        Ok(())
    }

    /// The active overlay key, copied out.
    pub fn current(&self) -> String {
        self.current.lock().clone()
    }

    /// The active overlay resolved against the catalog.
    pub fn current_overlay(&self) -> Overlay {
        let id = self.current.lock();
        self.catalog
            .lookup(&id)
            .unwrap_or_else(|| self.catalog.default_overlay())
            .clone()
    }

    /// Back to the passthrough default.
    pub fn reset(&self) {
        *self.current.lock() = self.catalog.default_overlay().id.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> SelectionState {
        SelectionState::new(Arc::new(OverlayCatalog::builtin()))
    }

    #[test]
    fn starts_on_passthrough() {
        assert_eq!(selection().current(), "none");
    }

    #[test]
    fn select_replaces_current() {
        let state = selection();
        state.select("warm").unwrap();
        assert_eq!(state.current(), "warm");
        assert_eq!(state.current_overlay().label, "Warm");
    }

    #[test]
    fn unknown_overlay_leaves_selection_unchanged() {
        let state = selection();
        state.select("cool").unwrap();

        let err = state.select("sepia").unwrap_err();
        assert_eq!(err, CaptureError::UnknownOverlay("sepia".into()));
        assert_eq!(state.current(), "cool");
    }

    #[test]
    fn reset_returns_to_default() {
        let state = selection();
        state.select("vintage").unwrap();
        state.reset();
        assert_eq!(state.current(), "none");
    }
}
