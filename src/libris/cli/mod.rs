//! # CLI Behavior
//!
//! This is **one possible UI client** for libris, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! For the overall architecture, see the library documentation in `lib.rs`.
//!
//! ## One Invocation, One Interaction
//!
//! Each run reloads the library, performs the single operation named by the
//! subcommand, writes back if that operation changed anything, and prints the
//! result. Running `libris` with no subcommand shows the home screen.
//!
//! ## Scope
//!
//! By default the library lives in the current directory (`./library.json`).
//! `-g/--global` switches to the per-user data directory.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `logging`: tracing subscriber setup (stderr only)
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling theme
//! - `templates`: Output templates

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
