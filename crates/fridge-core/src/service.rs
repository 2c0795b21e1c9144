//! # Inventory Service
//!
//! Business operations over one live [`Collection`] plus its undo/redo
//! [`History`].
//!
//! ## Undo Granularity
//! The service never snapshots on its own. Callers decide what one undo
//! step covers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot-on-attempt                                  │
//! │                                                                         │
//! │  snapshot_for_undo() ─────► undo: [.., S0]   redo: []                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  delete_item("milk", Dairy)                                             │
//! │       │                                                                 │
//! │       ├── true  ──► keep the snapshot (S0 is one undo away)             │
//! │       │                                                                 │
//! │       └── false ──► discard_last_undo_snapshot()                        │
//! │                     (a no-op must not pollute history)                  │
//! │                                                                         │
//! │  undo() ──► live = S0, redo: [S1]                                       │
//! │  redo() ──► live = S1, undo: [.., S0]                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::collection::Collection;
use crate::error::CoreResult;
use crate::history::History;
use crate::types::{Category, Date, Item};

/// Owns the live inventory and its snapshot history.
#[derive(Debug, Clone, Default)]
pub struct InventoryService {
    collection: Collection,
    history: History<Collection>,
}

impl InventoryService {
    /// Creates a service over an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service pre-filled with a small demo inventory.
    pub fn with_sample_items() -> CoreResult<Self> {
        let mut service = Self::new();
        for (name, category, quantity, (year, month, day)) in SAMPLE_ITEMS {
            service.add_item(name, category, quantity, Date::new(year, month, day))?;
        }
        Ok(service)
    }

    /// The live collection.
    #[inline]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds an item, merging quantities into an existing `(name, category)`.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        category: Category,
        quantity: f64,
        expiration: Date,
    ) -> CoreResult<()> {
        let item = Item::new(name, category, quantity, expiration);
        debug!(name = %item.name(), %category, quantity, "Adding item");
        self.collection.add(item)
    }

    /// Deletes the item with the given key. `false` if it does not exist.
    pub fn delete_item(&mut self, name: &str, category: Category) -> bool {
        let found = self.collection.remove(name, category);
        debug!(name, %category, found, "Deleting item");
        found
    }

    /// Replaces quantity and expiration of an item. `false` if it does not exist.
    pub fn update_item(
        &mut self,
        name: &str,
        category: Category,
        quantity: f64,
        expiration: Date,
    ) -> bool {
        let found = self
            .collection
            .update(name, category, quantity, expiration);
        debug!(name, %category, quantity, %expiration, found, "Updating item");
        found
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Copies every item whose name contains `text`.
    ///
    /// An empty `text` matches everything, so the result is a full copy in
    /// the same order. The live collection is not touched.
    pub fn filter_by_name_substring(&self, text: &str) -> CoreResult<Collection> {
        let filtered = self.collection.filtered(|item| item.name().contains(text))?;
        debug!(text, count = filtered.len(), "Filtered by name");
        Ok(filtered)
    }

    /// Copies items of `category` (or any category for `None`) that are
    /// expired or expire within `within_days` days of the local date.
    pub fn filter_by_category_and_expiration(
        &self,
        category: Category,
        within_days: i64,
    ) -> CoreResult<Collection> {
        let today = Local::now().date_naive();
        self.filter_by_category_and_expiration_at(category, within_days, today)
    }

    /// Same as [`filter_by_category_and_expiration`](Self::filter_by_category_and_expiration)
    /// with an explicit reference date.
    ///
    /// ## Window
    /// ```text
    ///   expired ◄──────────── today ─────────── today + within_days ──► later
    ///   ████████████████████████████████████████████│
    ///   included (days_left <= within_days)         excluded
    /// ```
    /// A negative `within_days` keeps only items expired at least that
    /// many days ago. Dates outside chrono's range never match.
    pub fn filter_by_category_and_expiration_at(
        &self,
        category: Category,
        within_days: i64,
        today: NaiveDate,
    ) -> CoreResult<Collection> {
        let filtered = self.collection.filtered(|item| {
            category.matches(item.category())
                && item
                    .expiration()
                    .days_from(today)
                    .is_some_and(|days_left| days_left <= within_days)
        })?;

        debug!(
            %category,
            within_days,
            %today,
            count = filtered.len(),
            "Filtered by category and expiration"
        );
        Ok(filtered)
    }

    // =========================================================================
    // Undo / Redo
    // =========================================================================

    /// Pushes a deep copy of the live collection onto the undo stack and
    /// clears the redo stack.
    ///
    /// Call this BEFORE the mutation that should become undoable.
    pub fn snapshot_for_undo(&mut self) -> CoreResult<()> {
        self.history.record(self.collection.try_clone()?)?;
        debug!(undo_depth = self.history.undo_depth(), "Snapshot taken");
        Ok(())
    }

    /// Drops the newest undo snapshot without restoring it.
    ///
    /// Returns `false` if the undo stack was already empty.
    pub fn discard_last_undo_snapshot(&mut self) -> bool {
        let discarded = self.history.discard_last().is_some();
        debug!(discarded, "Discarding last snapshot");
        discarded
    }

    /// Restores the newest undo snapshot. `Ok(false)` if there is none.
    pub fn undo(&mut self) -> CoreResult<bool> {
        if !self.history.can_undo() {
            return Ok(false);
        }

        match self.history.undo(self.collection.try_clone()?)? {
            Some(previous) => {
                self.collection = previous;
                debug!(len = self.collection.len(), "Undo applied");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Restores the newest redo snapshot. `Ok(false)` if there is none.
    pub fn redo(&mut self) -> CoreResult<bool> {
        if !self.history.can_redo() {
            return Ok(false);
        }

        match self.history.redo(self.collection.try_clone()?)? {
            Some(next) => {
                self.collection = next;
                debug!(len = self.collection.len(), "Redo applied");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    #[inline]
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }
}

/// Demo inventory used by [`InventoryService::with_sample_items`].
const SAMPLE_ITEMS: [(&str, Category, f64, (i32, i32, i32)); 10] = [
    ("milk", Category::Dairy, 1.0, (2022, 3, 15)),
    ("yogurt", Category::Dairy, 3.25, (2022, 3, 14)),
    ("chicken", Category::Meat, 2.5, (2022, 3, 26)),
    ("chocolate", Category::Sweets, 2.0, (2022, 8, 22)),
    ("eggs", Category::Dairy, 6.0, (2022, 3, 28)),
    ("beef", Category::Meat, 1.33, (2022, 3, 17)),
    ("apples", Category::Fruit, 4.0, (2022, 4, 12)),
    ("pears", Category::Fruit, 2.5, (2022, 4, 15)),
    ("oranges", Category::Fruit, 6.0, (2022, 4, 8)),
    ("sour_candy", Category::Sweets, 4.0, (2023, 4, 13)),
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INITIAL_CAPACITY;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 3, 10).unwrap()
    }

    fn in_days(days: u64) -> Date {
        Date::from(today().checked_add_days(chrono::Days::new(days)).unwrap())
    }

    fn names(collection: &Collection) -> Vec<&str> {
        collection.iter().map(|i| i.name()).collect()
    }

    fn service_with(names: &[&str]) -> InventoryService {
        let mut service = InventoryService::new();
        for (n, name) in names.iter().enumerate() {
            service
                .add_item(*name, Category::None, (n + 1) as f64, Date::new(2022, 3, 16))
                .unwrap();
        }
        service
    }

    #[test]
    fn test_add_delete_update() {
        let mut service = InventoryService::new();
        service
            .add_item("test1", Category::None, 1.0, Date::new(2222, 3, 15))
            .unwrap();
        service
            .add_item("test2", Category::None, 2.0, Date::new(2022, 3, 16))
            .unwrap();
        service
            .add_item("test3", Category::None, 3.0, Date::new(2022, 3, 17))
            .unwrap();
        assert_eq!(service.collection().len(), 3);

        assert!(service.delete_item("test3", Category::None));
        assert_eq!(service.collection().len(), 2);

        assert!(service.update_item("test2", Category::None, 3.0, Date::new(2022, 3, 20)));
        let updated = service.collection().get(1).unwrap();
        assert_eq!(updated.name(), "test2");
        assert_eq!(updated.quantity(), 3.0);
    }

    #[test]
    fn test_add_item_merges() {
        let mut service = InventoryService::new();
        let first = Date::new(2022, 3, 15);
        service.add_item("milk", Category::Dairy, 1.0, first).unwrap();
        service
            .add_item("milk", Category::Dairy, 2.0, Date::new(2022, 5, 1))
            .unwrap();

        assert_eq!(service.collection().len(), 1);
        let milk = service.collection().get(0).unwrap();
        assert_eq!(milk.quantity(), 3.0);
        assert_eq!(milk.expiration(), first);
    }

    #[test]
    fn test_delete_and_update_missing() {
        let mut service = service_with(&["a", "b"]);
        let before = service.collection().clone();

        assert!(!service.delete_item("c", Category::None));
        assert!(!service.update_item("a", Category::Meat, 1.0, Date::new(2022, 1, 1)));
        assert_eq!(service.collection(), &before);
    }

    #[test]
    fn test_filter_by_name_substring() {
        let service = service_with(&["test1", "test2", "other1"]);

        let filtered = service.filter_by_name_substring("1").unwrap();
        assert_eq!(names(&filtered), vec!["test1", "other1"]);

        let filtered = service.filter_by_name_substring("test").unwrap();
        assert_eq!(names(&filtered), vec!["test1", "test2"]);

        let filtered = service.filter_by_name_substring("zzz").unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_by_empty_substring_copies_all() {
        let service = service_with(&["c", "a", "b"]);

        let mut copy = service.filter_by_name_substring("").unwrap();
        assert_eq!(&copy, service.collection());

        copy.sort_by_name(false);
        assert_eq!(names(&copy), vec!["a", "b", "c"]);
        assert_eq!(names(service.collection()), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_filter_by_expiration_window_edges() {
        let mut service = InventoryService::new();
        service.add_item("week", Category::Dairy, 1.0, in_days(7)).unwrap();
        service.add_item("later", Category::Meat, 1.0, in_days(8)).unwrap();
        service
            .add_item("expired", Category::Fruit, 1.0, Date::new(2022, 3, 1))
            .unwrap();
        service.add_item("today", Category::None, 1.0, in_days(0)).unwrap();

        let filtered = service
            .filter_by_category_and_expiration_at(Category::None, 7, today())
            .unwrap();
        assert_eq!(names(&filtered), vec!["week", "expired", "today"]);
    }

    #[test]
    fn test_filter_by_category() {
        let mut service = InventoryService::new();
        service.add_item("milk", Category::Dairy, 1.0, in_days(2)).unwrap();
        service.add_item("beef", Category::Meat, 1.0, in_days(2)).unwrap();
        service.add_item("none", Category::None, 1.0, in_days(2)).unwrap();

        let dairy = service
            .filter_by_category_and_expiration_at(Category::Dairy, 7, today())
            .unwrap();
        assert_eq!(names(&dairy), vec!["milk"]);

        let all = service
            .filter_by_category_and_expiration_at(Category::None, 7, today())
            .unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_filter_by_negative_window() {
        let mut service = InventoryService::new();
        service
            .add_item("long_gone", Category::Meat, 1.0, Date::new(2022, 2, 1))
            .unwrap();
        service
            .add_item("just_gone", Category::Meat, 1.0, Date::new(2022, 3, 8))
            .unwrap();

        let filtered = service
            .filter_by_category_and_expiration_at(Category::Meat, -5, today())
            .unwrap();
        assert_eq!(names(&filtered), vec!["long_gone"]);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut service = service_with(&["test1", "test2"]);
        let s0 = service.collection().clone();

        service.snapshot_for_undo().unwrap();
        assert_eq!(service.undo_depth(), 1);
        assert!(service.delete_item("test2", Category::None));
        let s1 = service.collection().clone();
        assert_eq!(s1.len(), 1);

        assert!(service.undo().unwrap());
        assert_eq!(service.collection(), &s0);

        assert!(service.redo().unwrap());
        assert_eq!(service.collection(), &s1);
    }

    #[test]
    fn test_new_snapshot_invalidates_redo() {
        let mut service = service_with(&["a"]);

        service.snapshot_for_undo().unwrap();
        service
            .add_item("b", Category::None, 1.0, Date::new(2022, 3, 16))
            .unwrap();
        assert!(service.undo().unwrap());
        assert!(service.can_redo());

        service.snapshot_for_undo().unwrap();
        service
            .add_item("c", Category::None, 1.0, Date::new(2022, 3, 16))
            .unwrap();

        assert!(!service.redo().unwrap());
        assert_eq!(names(service.collection()), vec!["a", "c"]);
    }

    #[test]
    fn test_undo_redo_on_empty_history() {
        let mut service = service_with(&["a"]);
        let before = service.collection().clone();

        assert!(!service.undo().unwrap());
        assert!(!service.redo().unwrap());
        assert_eq!(service.collection(), &before);
    }

    #[test]
    fn test_discard_last_undo_snapshot() {
        let mut service = service_with(&["a"]);

        service.snapshot_for_undo().unwrap();
        assert!(!service.delete_item("missing", Category::None));
        assert!(service.discard_last_undo_snapshot());

        assert!(!service.can_undo());
        assert!(!service.undo().unwrap());
        assert!(!service.discard_last_undo_snapshot());
    }

    #[test]
    fn test_multi_step_undo() {
        let mut service = InventoryService::new();
        for name in ["a", "b", "c"] {
            service.snapshot_for_undo().unwrap();
            service
                .add_item(name, Category::Fruit, 1.0, Date::new(2022, 4, 1))
                .unwrap();
        }

        assert!(service.undo().unwrap());
        assert!(service.undo().unwrap());
        assert_eq!(names(service.collection()), vec!["a"]);
        assert_eq!(service.redo_depth(), 2);

        assert!(service.redo().unwrap());
        assert_eq!(names(service.collection()), vec!["a", "b"]);
    }

    #[test]
    fn test_snapshots_keep_grown_capacity() {
        let keys: Vec<String> = (0..=INITIAL_CAPACITY).map(|n| format!("item{n}")).collect();
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let mut service = service_with(&refs);
        assert_eq!(service.collection().capacity(), INITIAL_CAPACITY * 2);

        service.snapshot_for_undo().unwrap();
        assert!(service.delete_item("item0", Category::None));
        assert!(service.undo().unwrap());

        assert_eq!(service.collection().len(), INITIAL_CAPACITY + 1);
        assert_eq!(service.collection().capacity(), INITIAL_CAPACITY * 2);
    }

    #[test]
    fn test_sample_items() {
        let service = InventoryService::with_sample_items().unwrap();
        assert_eq!(service.collection().len(), 10);
        assert!(!service.can_undo());

        let milk = service.collection().find("milk", Category::Dairy).unwrap();
        assert_eq!(milk.quantity(), 1.0);
        assert_eq!(milk.expiration(), Date::new(2022, 3, 15));
    }
}
