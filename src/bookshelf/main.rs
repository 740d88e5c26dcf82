//! # Bookshelf CLI
//!
//! The binary is thin: the interactive shell lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/bookshelf/cli/)                             │
//! │  - clap flags + shell config (setup.rs, config.rs)          │
//! │  - line input and numeric coercion (input.rs)               │
//! │  - menu choices (menu.rs), the loop itself (shell.rs)       │
//! │  - colored messages and book rendering (print.rs)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (src/bookshelf/api.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quitting from the menu or closing stdin exits with status 0. Any other
//! terminal I/O failure is printed to stderr and exits with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
