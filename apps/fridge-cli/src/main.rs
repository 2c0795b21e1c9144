//! # Fridge Console Entry Point
//!
//! ## Exit Codes
//! - `0`: the user chose option 0, or input ended
//! - `1`: configuration, console I/O or inventory failure

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match fridge_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
