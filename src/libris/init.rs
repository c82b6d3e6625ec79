use crate::api::LibrisApi;
use crate::config::LibrisConfig;
use crate::error::{LibrisError, Result};
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the global data directory. Mostly useful for tests.
pub const GLOBAL_DATA_ENV: &str = "LIBRIS_GLOBAL_DATA";

pub struct LibrisContext {
    pub api: LibrisApi<FileStore>,
    pub scope: Scope,
    pub data_dir: PathBuf,
}

/// Per-user data directory, honoring [`GLOBAL_DATA_ENV`].
pub fn global_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(GLOBAL_DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "libris", "libris")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LibrisError::Store("Could not determine the user data directory".into()))
}

/// Where the library lives for `scope`: the working directory for project
/// scope, the per-user data directory for global scope.
pub fn data_dir_for(cwd: &Path, scope: Scope) -> Result<PathBuf> {
    match scope {
        Scope::Project => Ok(cwd.to_path_buf()),
        Scope::Global => global_data_dir(),
    }
}

pub fn initialize(cwd: &Path, use_global: bool) -> Result<LibrisContext> {
    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };
    let data_dir = data_dir_for(cwd, scope)?;

    let config = LibrisConfig::load_or_default(&data_dir);
    tracing::debug!(?scope, data_dir = %data_dir.display(), "initialized");

    let store = FileStore::new(data_dir.clone()).with_library_file(&config.library_file);
    let api = LibrisApi::new(store, data_dir.clone(), config);

    Ok(LibrisContext {
        api,
        scope,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILENAME;
    use crate::model::BookDraft;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn project_scope_uses_cwd() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path(), false).unwrap();
        assert_eq!(ctx.scope, Scope::Project);
        assert_eq!(ctx.data_dir, temp.path());
    }

    #[test]
    fn configured_library_file_is_used() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "library-file": "shelf.json" }"#,
        )
        .unwrap();

        let mut ctx = initialize(temp.path(), false).unwrap();
        ctx.api
            .add_book(BookDraft::new("Dune", "Frank Herbert", 1965, "Science Fiction"))
            .unwrap();
        assert!(temp.path().join("shelf.json").exists());
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "not json").unwrap();

        let ctx = initialize(temp.path(), false).unwrap();
        assert_eq!(ctx.api.settings(), &LibrisConfig::default());
    }
}
