//! # Cardz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Everything from the library's `api.rs` inward is UI agnostic. The CLI is
//! responsible for argument parsing, context initialization, logging setup,
//! dispatch, and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
