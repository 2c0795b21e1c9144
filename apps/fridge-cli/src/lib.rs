//! # Fridge Console Library
//!
//! Console admin panel for the intelligent refrigerator inventory.
//! `main.rs` only calls [`run`]; everything else lives here so it can be
//! driven from tests over in-memory streams.
//!
//! ## Module Organization
//! ```text
//! fridge_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── console.rs      ◄─── Prompting / printing over BufRead + Write
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── inventory.rs◄─── Lock-protected InventoryService
//! │   └── config.rs   ◄─── Environment configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Menu options, dispatch, run_menu
//! │   ├── listing.rs  ◄─── Options 1, 2, 6, 7
//! │   ├── item.rs     ◄─── Options 3, 4, 5 (undoable)
//! │   └── history.rs  ◄─── Options 8, 9
//! └── error.rs        ◄─── AppError
//! ```
//!
//! ## Output Streams
//! The menu, prompts and messages go to stdout. Log lines go to stderr so
//! they never interleave with what the user is answering.

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use std::io;

use fridge_core::InventoryService;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Session;
use console::Console;
use error::AppResult;
use state::{AppConfig, InventoryState};

/// Runs the console application on stdin / stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • FRIDGE_SAMPLE_DATA, FRIDGE_TODAY                                  │
/// │                                                                         │
/// │  3. Build the Inventory ──────────────────────────────────────────────► │
/// │     • Sample items or an empty fridge                                   │
/// │     • Wrapped in InventoryState                                         │
/// │                                                                         │
/// │  4. Run the Menu Loop ────────────────────────────────────────────────► │
/// │     • Until option 0 or end of input                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();
    info!("Starting fridge console...");

    let config = AppConfig::load()?;
    info!(sample_data = config.sample_data, today = ?config.today, "Configuration loaded");

    let service = if config.sample_data {
        InventoryService::with_sample_items()?
    } else {
        InventoryService::new()
    };
    info!(items = service.collection().len(), "Inventory ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut session = Session::new(console, InventoryState::new(service), config);
    commands::run_menu(&mut session)
}

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - ERROR: Unrecoverable failures
/// - WARN: Operations that failed and were reported to the user
/// - INFO: Startup and successful mutations
/// - DEBUG: Service calls with their arguments
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
