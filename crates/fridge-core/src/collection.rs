//! # Item Collection
//!
//! Ordered, growable storage of [`Item`]s keyed by `(name, category)`.
//!
//! ## Collection Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Collection Operations                                │
//! │                                                                         │
//! │  Operation                 Key found?           Effect                  │
//! │  ─────────                 ──────────           ──────                  │
//! │                                                                         │
//! │  add(item) ──────────────► yes ───────────────► quantity += item.qty    │
//! │                            no  ───────────────► push (grow if full)     │
//! │                                                                         │
//! │  remove(name, cat) ──────► yes ───────────────► shift left, true        │
//! │                            no  ───────────────► unchanged, false        │
//! │                                                                         │
//! │  update(name, cat, ..) ──► yes ───────────────► overwrite qty + date    │
//! │                            no  ───────────────► unchanged, false        │
//! │                                                                         │
//! │  Capacity: 32 ──► 64 ──► 128 ──► ...  (doubles when full)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two items share the same `(name, category)`
//! - Insertion order is kept until a sort is requested
//! - `len() <= capacity()`

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{Category, Date, Item};
use crate::{GROWTH_FACTOR, INITIAL_CAPACITY};

/// Ordered collection of items with merge-on-add.
#[derive(Debug, Serialize)]
pub struct Collection {
    items: Vec<Item>,

    #[serde(skip)]
    capacity: usize,
}

impl Collection {
    /// Creates an empty collection with the initial capacity.
    pub fn new() -> Self {
        Collection {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Empty collection whose slots are reserved up front, without aborting
    /// when the allocator refuses.
    fn try_with_capacity(capacity: usize) -> CoreResult<Self> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| CoreError::CapacityExhausted {
                what: "collection",
                requested: capacity,
            })?;
        Ok(Collection { items, capacity })
    }

    /// Deep copy that reports allocation failure instead of aborting.
    ///
    /// Snapshots, undo/redo and listings copy through this; the logical
    /// capacity is carried over.
    pub fn try_clone(&self) -> CoreResult<Collection> {
        let mut copy = Collection::try_with_capacity(self.capacity.max(self.items.len()))?;
        copy.items.extend(self.items.iter().cloned());
        Ok(copy)
    }

    /// Adds an item, or merges it into the entry with the same key.
    ///
    /// ## Behavior
    /// - Key already present: the existing quantity grows by
    ///   `item.quantity()`, its expiration is left untouched, and `item`
    ///   is dropped
    /// - Key not present: `item` is appended at the end
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(CoreError::CapacityExhausted)` if storage could not grow;
    ///   the collection is unchanged
    pub fn add(&mut self, item: Item) -> CoreResult<()> {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.is(item.name(), item.category()))
        {
            existing.add_quantity(item.quantity());
            return Ok(());
        }

        reserve_slot(&mut self.items, &mut self.capacity, "collection")?;
        self.items.push(item);
        Ok(())
    }

    /// Removes the item with the given key, keeping the others in order.
    pub fn remove(&mut self, name: &str, category: Category) -> bool {
        match self.position(name, category) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Overwrites quantity and expiration of the item with the given key.
    pub fn update(&mut self, name: &str, category: Category, quantity: f64, expiration: Date) -> bool {
        match self.items.iter_mut().find(|i| i.is(name, category)) {
            Some(item) => {
                item.set_stock(quantity, expiration);
                true
            }
            None => false,
        }
    }

    /// Returns the item at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Finds the item with the given key.
    pub fn find(&self, name: &str, category: Category) -> Option<&Item> {
        self.items.iter().find(|i| i.is(name, category))
    }

    fn position(&self, name: &str, category: Category) -> Option<usize> {
        self.items.iter().position(|i| i.is(name, category))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of slots available before the next growth step.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Builds a new collection holding copies of the items that pass
    /// `keep`, in their current order.
    pub fn filtered<F>(&self, mut keep: F) -> CoreResult<Collection>
    where
        F: FnMut(&Item) -> bool,
    {
        let mut out = Collection::try_with_capacity(INITIAL_CAPACITY)?;
        for item in self.items.iter().filter(|i| keep(*i)) {
            out.add(item.clone())?;
        }
        Ok(out)
    }

    /// Sorts in place by quantity (ascending unless `descending`).
    pub fn sort_by_quantity(&mut self, descending: bool) {
        if descending {
            self.bubble_sort(|current, next| current.quantity() < next.quantity());
        } else {
            self.bubble_sort(|current, next| current.quantity() > next.quantity());
        }
    }

    /// Sorts in place by name, comparing bytes (ascending unless `descending`).
    pub fn sort_by_name(&mut self, descending: bool) {
        if descending {
            self.bubble_sort(|current, next| current.name() < next.name());
        } else {
            self.bubble_sort(|current, next| current.name() > next.name());
        }
    }

    /// Adjacent-swap passes; `out_of_order(a, b)` says whether `a` must
    /// move behind `b`.
    fn bubble_sort<F>(&mut self, out_of_order: F)
    where
        F: Fn(&Item, &Item) -> bool,
    {
        let len = self.items.len();
        if len < 2 {
            return;
        }

        for pass in 0..len - 1 {
            for j in 0..len - pass - 1 {
                if out_of_order(&self.items[j], &self.items[j + 1]) {
                    self.items.swap(j, j + 1);
                }
            }
        }
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: every item is cloned, the logical capacity is kept.
///
/// Aborts on allocation failure like any `Clone`; see [`Collection::try_clone`].
impl Clone for Collection {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Collection {
            items,
            capacity: self.capacity,
        }
    }
}

/// Two collections are equal when they hold equal items in the same order.
impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Growth
// =============================================================================

/// Makes room for one more element, doubling `capacity` when `slots` is full.
///
/// Shared by [`Collection`] and [`History`](crate::History) so both grow
/// geometrically and report allocation failure instead of aborting.
pub(crate) fn reserve_slot<T>(
    slots: &mut Vec<T>,
    capacity: &mut usize,
    what: &'static str,
) -> CoreResult<()> {
    if slots.len() < *capacity {
        return Ok(());
    }

    let requested = capacity
        .checked_mul(GROWTH_FACTOR)
        .ok_or(CoreError::CapacityExhausted {
            what,
            requested: usize::MAX,
        })?;
    if requested <= slots.len() {
        // zero capacity cannot grow geometrically
        return Err(CoreError::CapacityExhausted { what, requested });
    }

    slots
        .try_reserve_exact(requested - slots.len())
        .map_err(|_| CoreError::CapacityExhausted { what, requested })?;

    *capacity = requested;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
