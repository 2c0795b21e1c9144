//! # Application Error Type
//!
//! Unified error type for the console application.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  stdin / stdout ─── io::Error ──────────┐                               │
//! │  environment   ─── ConfigError ─────────┼──► AppError ──► main()        │
//! │  fridge-core   ─── CoreError ───────────┘                               │
//! │                                                                         │
//! │  End of input is its own variant: the menu loop treats it as "exit".    │
//! │  Not-found results never become errors; handlers print a message.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fridge_core::CoreError;
use thiserror::Error;

use crate::state::ConfigError;

/// Errors surfaced by the console application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading from stdin or writing to stdout failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end-of-file while a value was expected.
    #[error("Input closed")]
    InputClosed,

    /// Environment configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The inventory core reported a failure.
    #[error("Inventory error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for console operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::from(ConfigError::InvalidValue("FRIDGE_TODAY".to_string()));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for FRIDGE_TODAY"
        );

        let err = AppError::from(CoreError::CapacityExhausted {
            what: "undo stack",
            requested: 64,
        });
        assert_eq!(
            err.to_string(),
            "Inventory error: Could not grow undo stack to 64 slots"
        );
    }
}
