//! # Libris CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch + context wiring (commands.rs)                  │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! │  - tracing subscriber on stderr (logging.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (api.rs, commands/, store/)                        │
//! │  - Returns structured `CmdResult` values                    │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Warnings and errors meant for the user arrive as messages inside
//! `CmdResult` and are printed to stdout with exit status 0. Only genuine
//! faults (an unwritable library file, say) reach `main` as `Err`; those are
//! printed to stderr and the process exits with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
