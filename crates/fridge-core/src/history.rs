//! # Snapshot History
//!
//! Two LIFO stacks of full-state snapshots backing linear undo/redo.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    History Transitions                                  │
//! │                                                                         │
//! │  record(snapshot) ──► past.push(snapshot), future.clear()               │
//! │                                                                         │
//! │  undo(current)    ──► past.pop() ──► previous   (None if empty)        │
//! │                       future.push(current)                              │
//! │                                                                         │
//! │  redo(current)    ──► future.pop() ──► next     (None if empty)        │
//! │                       past.push(current)                                │
//! │                                                                         │
//! │  discard_last()   ──► past.pop(), dropped                               │
//! │                                                                         │
//! │  Depth is unbounded; both stacks grow like Collection (32, 64, ...).    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::collection::reserve_slot;
use crate::error::CoreResult;
use crate::INITIAL_CAPACITY;

/// Undo/redo stacks of owned snapshots.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: Vec<T>,
    past_capacity: usize,
    future: Vec<T>,
    future_capacity: usize,
}

impl<T> History<T> {
    pub fn new() -> Self {
        History {
            past: Vec::with_capacity(INITIAL_CAPACITY),
            past_capacity: INITIAL_CAPACITY,
            future: Vec::with_capacity(INITIAL_CAPACITY),
            future_capacity: INITIAL_CAPACITY,
        }
    }

    /// Records a new undo point. Clears the redo stack.
    ///
    /// On error both stacks are left untouched.
    pub fn record(&mut self, snapshot: T) -> CoreResult<()> {
        reserve_slot(&mut self.past, &mut self.past_capacity, "undo stack")?;
        self.future.clear();
        self.past.push(snapshot);
        Ok(())
    }

    /// Drops the newest undo point without restoring it.
    pub fn discard_last(&mut self) -> Option<T> {
        self.past.pop()
    }

    /// Moves `current` to the redo stack and hands back the newest undo point.
    ///
    /// `Ok(None)` when there is nothing to undo; `current` is dropped then.
    pub fn undo(&mut self, current: T) -> CoreResult<Option<T>> {
        if self.past.is_empty() {
            return Ok(None);
        }
        reserve_slot(&mut self.future, &mut self.future_capacity, "redo stack")?;

        let previous = self.past.pop();
        self.future.push(current);
        Ok(previous)
    }

    /// Moves `current` to the undo stack and hands back the newest redo point.
    pub fn redo(&mut self, current: T) -> CoreResult<Option<T>> {
        if self.future.is_empty() {
            return Ok(None);
        }
        reserve_slot(&mut self.past, &mut self.past_capacity, "undo stack")?;

        let next = self.future.pop();
        self.past.push(current);
        Ok(next)
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    #[inline]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
