//! # Libris Architecture
//!
//! Libris is a **UI-agnostic book catalog library**. It keeps a personal list of
//! books (title, author, year, genre, read flag, progress, rating) in a single
//! JSON file and derives listings, statistics and exports from it. The CLI is
//! one client of the library, not the library itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders views, sets up logging         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves default sort, export path, current year         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation: add, remove, search, list,     │
//! │    stats, goal, export, exit, recommend, config             │
//! │  - Returns `CmdResult` with data plus user-facing messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load / save the whole catalog           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Interaction Model
//!
//! Every operation reloads the full catalog, applies one change in memory and,
//! if anything changed, rewrites the whole file. There is no long-lived
//! catalog object and no hidden global: the catalog is passed into each
//! operation explicitly. Concurrent writers are not supported.
//!
//! ## Messages, Not Output
//!
//! Commands never print. Conditions a user should see (a missing field on add,
//! an empty library, a search with no hits) come back as [`api::CmdMessage`]s
//! with a level (info, success, warning, error). Only genuine faults such as a
//! failed write are returned as `Err`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, `BookDraft`, `Catalog`, `SortKey`
//! - [`index`]: 1-based display numbering for listings
//! - [`recommend`]: Genre recommendation table
//! - [`config`]: Configuration management
//! - [`init`]: Scope and data directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod recommend;
pub mod store;
