//! # Inventory State
//!
//! Holds the single [`InventoryService`] of the process.
//!
//! ## Thread Safety
//! The whole service (live collection + undo/redo stacks) sits behind one
//! mutex. Filters, snapshots and undo/redo copy the full collection, so
//! they must see it consistently with respect to any mutation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory State                                      │
//! │                                                                         │
//! │  handler ──► with_service(|s| s.filter_..())       (lock, read, unlock) │
//! │                                                                         │
//! │  handler ──► with_service_mut(|s| {                (lock)               │
//! │                  s.snapshot_for_undo()?;                                │
//! │                  s.delete_item(..)                                      │
//! │              })                                     (unlock)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use fridge_core::InventoryService;

/// Shared, lock-protected inventory service.
#[derive(Debug, Clone)]
pub struct InventoryState {
    service: Arc<Mutex<InventoryService>>,
}

impl InventoryState {
    pub fn new(service: InventoryService) -> Self {
        InventoryState {
            service: Arc::new(Mutex::new(service)),
        }
    }

    /// Executes a function with read access to the service.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_service(|s| s.collection().len());
    /// ```
    pub fn with_service<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryService) -> R,
    {
        let service = self.service.lock().expect("Inventory mutex poisoned");
        f(&service)
    }

    /// Executes a function with write access to the service.
    pub fn with_service_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryService) -> R,
    {
        let mut service = self.service.lock().expect("Inventory mutex poisoned");
        f(&mut service)
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new(InventoryService::new())
    }
}
