//! Undo and redo commands.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use super::Session;
use crate::error::AppResult;

/// Restores the collection as it was before the last mutation.
pub fn undo<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    match session.state.with_service_mut(|s| s.undo()) {
        Ok(true) => {
            info!("Undo applied");
            session
                .console
                .say("INFO: Successfully undone previous operation.")
        }
        Ok(false) => session.console.say("ERROR: Failed to undo previous operation."),
        Err(err) => {
            warn!(error = %err, "Undo failed");
            session.console.say("ERROR: Failed to undo previous operation.")
        }
    }
}

/// Re-applies the last undone mutation.
pub fn redo<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    match session.state.with_service_mut(|s| s.redo()) {
        Ok(true) => {
            info!("Redo applied");
            session
                .console
                .say("INFO: Successfully redone previous operation.")
        }
        Ok(false) => session.console.say("ERROR: Failed to redo previous operation."),
        Err(err) => {
            warn!(error = %err, "Redo failed");
            session.console.say("ERROR: Failed to redo previous operation.")
        }
    }
}

#[cfg(test)]
mod tests {
    use fridge_core::{Category, Date, InventoryService};

    use super::super::test_support::{output, session};
    use super::*;

    #[test]
    fn test_undo_and_redo_with_empty_history() {
        let mut s = session(InventoryService::new(), "");
        undo(&mut s).unwrap();
        redo(&mut s).unwrap();

        assert_eq!(
            output(s),
            "ERROR: Failed to undo previous operation.\nERROR: Failed to redo previous operation.\n"
        );
    }

    #[test]
    fn test_undo_then_redo() {
        let mut service = InventoryService::new();
        service.snapshot_for_undo().unwrap();
        service
            .add_item("cake", Category::Sweets, 1.0, Date::new(2022, 3, 12))
            .unwrap();

        let mut s = session(service, "");
        undo(&mut s).unwrap();
        assert!(s.state.with_service(|svc| svc.collection().is_empty()));
        redo(&mut s).unwrap();
        assert_eq!(s.state.with_service(|svc| svc.collection().len()), 1);

        let out = output(s);
        assert!(out.contains("INFO: Successfully undone previous operation.\n"));
        assert!(out.contains("INFO: Successfully redone previous operation.\n"));
    }
}
