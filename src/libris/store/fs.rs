use super::DataStore;
use crate::error::{LibrisError, Result};
use crate::model::Catalog;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const DEFAULT_LIBRARY_FILE: &str = "library.json";

pub struct FileStore {
    root: PathBuf,
    library_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            library_file: DEFAULT_LIBRARY_FILE.to_string(),
        }
    }

    pub fn with_library_file(mut self, name: &str) -> Self {
        self.library_file = name.to_string();
        self
    }

    pub fn library_path(&self) -> PathBuf {
        self.root.join(&self.library_file)
    }

    /// Creates the directory holding the library file, which may sit below
    /// `root` when the configured name has subdirectories.
    fn ensure_dir(&self) -> Result<()> {
        let path = self.library_path();
        let dir = path.parent().unwrap_or(&self.root);
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(LibrisError::Io)?;
        }
        Ok(())
    }
}

/// Pretty JSON with 4-space indentation, the layout the store has always used.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(LibrisError::Serialization)?;
    Ok(buf)
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Catalog> {
        let path = self.library_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no library file, starting empty");
                return Ok(Catalog::new());
            }
            Err(e) => return Err(LibrisError::Io(e)),
        };

        match serde_json::from_str::<Catalog>(&content) {
            Ok(catalog) => {
                tracing::debug!(path = %path.display(), books = catalog.len(), "loaded library");
                Ok(catalog)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "library file is malformed, treating it as empty"
                );
                Ok(Catalog::new())
            }
        }
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.ensure_dir()?;
        let path = self.library_path();
        let content = to_pretty_json(catalog)?;
        fs::write(&path, content).map_err(LibrisError::Io)?;
        tracing::debug!(path = %path.display(), books = catalog.len(), "saved library");
        Ok(())
    }
}
