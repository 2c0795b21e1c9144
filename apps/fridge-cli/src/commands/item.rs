//! # Item Commands
//!
//! Add, delete and update. Each one is undoable.
//!
//! ## Snapshot Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Undoable Mutation                                    │
//! │                                                                         │
//! │  1. Read every field from the console (no lock held)                    │
//! │  2. Lock the service                                                    │
//! │  3. snapshot_for_undo()            undo += [live], redo cleared         │
//! │  4. Run the mutation                                                    │
//! │       ├── success ──► keep snapshot                                     │
//! │       └── failure ──► discard_last_undo_snapshot()                      │
//! │  5. Unlock, print the outcome                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed operation therefore leaves no undo entry behind, although the
//! redo stack is still cleared by the attempt.

use std::io::{BufRead, Write};

use fridge_core::{Category, CoreResult, Date};
use tracing::{info, warn};

use super::Session;
use crate::error::AppResult;

/// Fields entered for an add or update.
struct ItemInput {
    name: String,
    category: Category,
    quantity: f64,
    expiration: Date,
}

fn read_key<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<(String, Category)> {
    let name = session.console.read_name()?;
    let category = session.console.read_item_category()?;
    Ok((name, category))
}

fn read_item<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<ItemInput> {
    let (name, category) = read_key(session)?;
    let quantity = session.console.read_decimal("Quantity: ")?;
    let expiration = session.console.read_date("Expiration date:")?;
    Ok(ItemInput {
        name,
        category,
        quantity,
        expiration,
    })
}

/// Adds a product, or merges its quantity into an existing one.
pub fn add<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    let input = read_item(session)?;
    let name = input.name.clone();

    let outcome = session.state.with_service_mut(|s| -> CoreResult<()> {
        s.snapshot_for_undo()?;
        if let Err(err) = s.add_item(input.name, input.category, input.quantity, input.expiration) {
            s.discard_last_undo_snapshot();
            return Err(err);
        }
        Ok(())
    });

    match outcome {
        Ok(()) => {
            info!(%name, category = %input.category, "Product added");
            session.console.say("INFO: Product added successfully.")
        }
        Err(err) => {
            warn!(error = %err, %name, "Could not add product");
            session
                .console
                .say("ERROR: Could not add product due to memory issues.")
        }
    }
}

/// Deletes a product identified by name and category.
pub fn delete<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    let (name, category) = read_key(session)?;

    let deleted = session.state.with_service_mut(|s| -> CoreResult<bool> {
        s.snapshot_for_undo()?;
        let deleted = s.delete_item(&name, category);
        if !deleted {
            s.discard_last_undo_snapshot();
        }
        Ok(deleted)
    })?;

    if deleted {
        info!(%name, %category, "Product deleted");
        session.console.say("INFO: Product deleted successfully.")
    } else {
        session
            .console
            .say("ERROR: The product was not deleted because it does not exist!")
    }
}

/// Replaces quantity and expiration of an existing product.
pub fn update<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    let input = read_item(session)?;

    let updated = session.state.with_service_mut(|s| -> CoreResult<bool> {
        s.snapshot_for_undo()?;
        let updated = s.update_item(&input.name, input.category, input.quantity, input.expiration);
        if !updated {
            s.discard_last_undo_snapshot();
        }
        Ok(updated)
    })?;

    if updated {
        info!(name = %input.name, category = %input.category, "Product updated");
        session.console.say("INFO: Product updated successfully.")
    } else {
        session
            .console
            .say("ERROR: The product was not updated because it does not exist!")
    }
}
