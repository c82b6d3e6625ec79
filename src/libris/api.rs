//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for catalog operations, whatever UI sits on top.
//!
//! Each call is one interaction: the command it dispatches to reloads the
//! catalog from the store, applies one operation, writes back if it mutated
//! anything, and returns a [`CmdResult`]. Nothing is cached between calls, so
//! two calls never disagree about what is on disk.
//!
//! The facade resolves the few inputs that depend on context (the configured
//! default sort, the export location, the current year for the reading goal)
//! and otherwise passes arguments straight through.
//!
//! `LibrisApi<S: DataStore>` is generic over the storage backend:
//! - Production: `LibrisApi<FileStore>`
//! - Testing: `LibrisApi<InMemoryStore>`

use crate::commands;
use crate::config::{LibrisConfig, CONFIG_FILENAME};
use crate::error::Result;
use crate::model::{BookDraft, SortKey};
use crate::store::DataStore;
use chrono::Datelike;
use std::path::{Path, PathBuf};

/// The main API facade for libris operations.
pub struct LibrisApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
    config: LibrisConfig,
}

impl<S: DataStore> LibrisApi<S> {
    pub fn new(store: S, data_dir: PathBuf, config: LibrisConfig) -> Self {
        Self {
            store,
            data_dir,
            config,
        }
    }

    pub fn add_book(&mut self, draft: BookDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn remove_books(&mut self, title: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, title)
    }

    pub fn search_books(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    /// Lists the library sorted by `sort`, or by the configured default.
    pub fn list_books(&self, sort: Option<SortKey>) -> Result<CmdResult> {
        commands::list::run(&self.store, sort.unwrap_or(self.config.default_sort))
    }

    pub fn statistics(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn reading_goal(&self, goal: u32) -> Result<CmdResult> {
        let year = chrono::Local::now().year();
        commands::goal::run(&self.store, goal, year)
    }

    /// Exports to `output`, or to the configured export file. Relative paths
    /// land in the data directory.
    pub fn export_library(&self, output: Option<&Path>) -> Result<CmdResult> {
        let path = self.export_path(output);
        let protected = [
            self.data_dir.join(&self.config.library_file),
            self.data_dir.join(CONFIG_FILENAME),
        ];
        commands::export::run(&self.store, &path, &protected)
    }

    pub fn recommend(&self, genre: &str) -> CmdResult {
        commands::recommend::run(genre)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn exit(&mut self) -> Result<CmdResult> {
        commands::exit::run(&mut self.store)
    }

    pub fn settings(&self) -> &LibrisConfig {
        &self.config
    }

    fn export_path(&self, output: Option<&Path>) -> PathBuf {
        let target = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.config.export_file));
        if target.is_absolute() {
            target
        } else {
            self.data_dir.join(target)
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, GoalProgress, LibraryStats, MessageLevel};
