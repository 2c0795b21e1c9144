//! # State Module
//!
//! Application state for the console.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌────────────────────────────┐   ┌────────────────────────────┐        │
//! │  │      InventoryState        │   │        AppConfig           │        │
//! │  │                            │   │                            │        │
//! │  │  Arc<Mutex<                │   │  sample_data               │        │
//! │  │    InventoryService>>      │   │  today (optional)          │        │
//! │  └────────────────────────────┘   └────────────────────────────┘        │
//! │                                                                         │
//! │  InventoryState: one coarse lock per service instance                   │
//! │  AppConfig: read-only after initialization                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod inventory;

pub use config::{AppConfig, ConfigError};
pub use inventory::InventoryState;
