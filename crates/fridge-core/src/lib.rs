//! # fridge-core: Pure Inventory Logic
//!
//! This crate is the **heart** of the fridge inventory. It keeps named,
//! categorized items with quantities and expiration dates, and offers
//! linear undo/redo over whole-state snapshots.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fridge Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (fridge-cli)                         │   │
//! │  │    Menu ──► Prompts ──► Handlers ──► Rendered item lines        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fridge-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ collection │  │  service  │  │ validation│  │   │
//! │  │   │   Item    │  │ Collection │  │ Inventory │  │   rules   │  │   │
//! │  │   │ Category  │  │  merge/    │  │  Service  │  │  checks   │  │   │
//! │  │   │   Date    │  │  sort      │  │  History  │  │           │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • IN-MEMORY ONLY              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Category, Date)
//! - [`collection`] - Ordered item storage with merge-on-add
//! - [`history`] - Snapshot stacks for undo/redo
//! - [`service`] - Business operations and filters
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for the presentation layer
//!
//! ## Example Usage
//!
//! ```rust
//! use fridge_core::{Category, Date, InventoryService};
//!
//! let mut service = InventoryService::new();
//! service.add_item("milk", Category::Dairy, 1.0, Date::new(2022, 3, 15)).unwrap();
//! service.add_item("milk", Category::Dairy, 2.0, Date::new(2022, 4, 1)).unwrap();
//!
//! // Same (name, category): quantities merge, the first expiration stays
//! let milk = service.collection().get(0).unwrap();
//! assert_eq!(milk.quantity(), 3.0);
//! assert_eq!(milk.expiration(), Date::new(2022, 3, 15));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod error;
pub mod history;
pub mod service;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use collection::Collection;
pub use error::{CoreError, CoreResult, ValidationError};
pub use history::History;
pub use service::InventoryService;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of slots a fresh collection (or history stack) starts with.
pub const INITIAL_CAPACITY: usize = 32;

/// Factor applied to the capacity whenever a collection is full.
pub const GROWTH_FACTOR: usize = 2;

/// Earliest year accepted for an expiration date at the input boundary.
pub const MIN_YEAR: i32 = 2000;

/// Latest year accepted for an expiration date at the input boundary.
pub const MAX_YEAR: i32 = 2100;
