use crate::error::{LibrisError, Result};
use crate::model::SortKey;
use crate::store::fs::{to_pretty_json, DEFAULT_LIBRARY_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const CONFIG_FILENAME: &str = "libris.json";
pub const DEFAULT_EXPORT_FILE: &str = "library_export.csv";

/// Keys accepted by `config`, in display order.
pub const KEYS: [&str; 3] = ["library-file", "export-file", "default-sort"];

/// Configuration for libris, stored next to the library in libris.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LibrisConfig {
    /// File name of the JSON library inside the data directory
    #[serde(default = "default_library_file")]
    pub library_file: String,

    /// File name used by `export` when no output path is given
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Column `list` sorts by when none is requested
    #[serde(default)]
    pub default_sort: SortKey,
}

fn default_library_file() -> String {
    DEFAULT_LIBRARY_FILE.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for LibrisConfig {
    fn default() -> Self {
        Self {
            library_file: default_library_file(),
            export_file: default_export_file(),
            default_sort: SortKey::default(),
        }
    }
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibrisError::Io)?;
        let config: LibrisConfig =
            serde_json::from_str(&content).map_err(LibrisError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LibrisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        fs::write(config_path, to_pretty_json(self)?).map_err(LibrisError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "library-file" => Some(self.library_file.clone()),
            "export-file" => Some(self.export_file.clone()),
            "default-sort" => Some(self.default_sort.to_string()),
            _ => None,
        }
    }

    /// Like [`LibrisConfig::load`], but an unreadable or malformed file is
    /// logged and replaced by defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(&config_dir).unwrap_or_else(|e| {
            tracing::warn!(
                dir = %config_dir.as_ref().display(),
                error = %e,
                "could not read config, using defaults"
            );
            Self::default()
        })
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "library-file" => {
                let value = non_empty(key, value)?;
                reject_collision(key, &value, &[CONFIG_FILENAME, &self.export_file])?;
                self.library_file = value;
            }
            "export-file" => {
                let value = non_empty(key, value)?;
                reject_collision(key, &value, &[CONFIG_FILENAME, &self.library_file])?;
                self.export_file = value;
            }
            "default-sort" => {
                self.default_sort = value.parse().map_err(LibrisError::Config)?;
            }
            other => {
                return Err(LibrisError::Config(format!(
                    "Unknown config key: {} (expected one of: {})",
                    other,
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

/// `name` with `.` components dropped, so `./library.json` and
/// `library.json` compare equal.
pub(crate) fn normalized(name: &Path) -> PathBuf {
    name.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// The library, the export and the config must be three different files.
fn reject_collision(key: &str, value: &str, taken: &[&str]) -> Result<()> {
    let wanted = normalized(Path::new(value));
    match taken
        .iter()
        .find(|name| normalized(Path::new(name)) == wanted)
    {
        Some(name) => Err(LibrisError::Config(format!(
            "{} cannot be {}: that file is already in use",
            key, name
        ))),
        None => Ok(()),
    }
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LibrisError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LibrisConfig::default();
        assert_eq!(config.library_file, "library.json");
        assert_eq!(config.export_file, "library_export.csv");
        assert_eq!(config.default_sort, SortKey::Title);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = LibrisConfig::load(temp.path()).unwrap();
        assert_eq!(config, LibrisConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("data");

        let mut config = LibrisConfig::default();
        config.set("default-sort", "year").unwrap();
        config.set("export-file", "books.csv").unwrap();
        config.save(&dir).unwrap();

        let loaded = LibrisConfig::load(&dir).unwrap();
        assert_eq!(loaded.default_sort, SortKey::Year);
        assert_eq!(loaded.export_file, "books.csv");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "default-sort": "rating" }"#,
        )
        .unwrap();

        let config = LibrisConfig::load(temp.path()).unwrap();
        assert_eq!(config.default_sort, SortKey::Rating);
        assert_eq!(config.library_file, "library.json");
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = LibrisConfig::default();
        assert!(config.set("default-sort", "pages").is_err());
        assert!(config.set("library-file", "   ").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, LibrisConfig::default());
    }

    #[test]
    fn test_set_rejects_file_collisions() {
        let mut config = LibrisConfig::default();
        assert!(config.set("export-file", "library.json").is_err());
        assert!(config.set("export-file", "./library.json").is_err());
        assert!(config.set("export-file", CONFIG_FILENAME).is_err());
        assert!(config.set("library-file", "library_export.csv").is_err());
        assert!(config.set("library-file", "libris.json").is_err());
        assert_eq!(config, LibrisConfig::default());

        config.set("library-file", "shelf.json").unwrap();
        config.set("export-file", "library.json").unwrap();
        assert_eq!(config.export_file, "library.json");
    }

    #[test]
    fn test_load_or_default_recovers_from_malformed_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(LibrisConfig::load(temp.path()).is_err());
        assert_eq!(
            LibrisConfig::load_or_default(temp.path()),
            LibrisConfig::default()
        );
    }

    #[test]
    fn test_entries_in_key_order() {
        let keys: Vec<_> = LibrisConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, KEYS);
    }
}
