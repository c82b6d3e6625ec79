//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the catalog lives. Every interaction
//! reads the whole catalog, works on it in memory, and (for mutations) writes
//! the whole catalog back. There is no partial update and no locking: a single
//! process and a single user are assumed.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON array in `library.json`
//! - [`memory::InMemoryStore`]: keeps the catalog in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── library.json        # JSON array of book records
//! ├── libris.json         # Optional configuration
//! └── library_export.csv  # Written on demand by `export`
//! ```
//!
//! A missing or malformed `library.json` loads as an empty catalog. That is a
//! silent recovery rather than an error, so the next save will replace a
//! corrupt file with whatever the user has in memory.

use crate::error::Result;
use crate::model::Catalog;

pub mod fs;
pub mod memory;

/// Whole-catalog persistence.
pub trait DataStore {
    /// Read the full catalog. Absent or unparseable data yields an empty catalog.
    fn load(&self) -> Result<Catalog>;

    /// Overwrite the stored catalog with `catalog`.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;
}
