use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::io::recovery;
use crate::model::item::Item;

/// Fixed name of the storage record inside the data directory.
pub const STORAGE_FILE: &str = "todos.json";

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no home directory found (set TICKED_DIR or HOME)")]
    NoDataDir,
}

/// The single persisted record: a versioned wrapper around the item array.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredState {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    items: Vec<Item>,
}

/// Resolve the default data directory: `$TICKED_DIR`, else `$HOME/.ticked`.
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    if let Some(dir) = std::env::var_os("TICKED_DIR") {
        return Ok(PathBuf::from(dir));
    }
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".ticked"))
        .ok_or(StorageError::NoDataDir)
}

/// Load the item collection from the data directory.
/// A missing file is an empty collection; a malformed file is an error
/// (canonical data is never silently reset).
pub fn load_items(data_dir: &Path) -> Result<Vec<Item>, StorageError> {
    let path = data_dir.join(STORAGE_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path).map_err(|source| StorageError::Read {
        path: path.clone(),
        source,
    })?;
    let state: StoredState =
        serde_json::from_str(&content).map_err(|source| StorageError::Parse { path, source })?;
    Ok(state.items)
}

/// Save the item collection to the data directory, atomically.
/// On failure the serialized payload is captured in the recovery log so the
/// data survives even when the write doesn't.
pub fn save_items(data_dir: &Path, items: &[Item]) -> Result<(), StorageError> {
    let state = StoredState {
        version: 0,
        items: items.to_vec(),
    };
    let content = serde_json::to_string_pretty(&state)
        .unwrap_or_else(|_| String::from("{\"version\":0,\"items\":[]}"));

    let path = data_dir.join(STORAGE_FILE);
    let write = fs::create_dir_all(data_dir)
        .and_then(|_| recovery::atomic_write(&path, content.as_bytes()));
    if let Err(source) = write {
        recovery::log_write_failure(data_dir, STORAGE_FILE, &source, &content);
        return Err(StorageError::Write { path, source });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("buy milk".into()),
            Item {
                completed: true,
                ..Item::new("water plants".into())
            },
        ]
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let items = sample_items();
        save_items(dir.path(), &items).unwrap();
        let loaded = load_items(dir.path()).unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_items(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn load_malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), "not json {{{").unwrap();
        assert!(matches!(
            load_items(dir.path()),
            Err(StorageError::Parse { .. })
        ));
    }

    #[test]
    fn load_tolerates_minimal_record() {
        // `version` and `items` both default
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), "{}").unwrap();
        assert!(load_items(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn save_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeper/still");
        save_items(&nested, &sample_items()).unwrap();
        assert_eq!(load_items(&nested).unwrap().len(), 2);
    }

    #[test]
    fn record_is_versioned() {
        let dir = TempDir::new().unwrap();
        save_items(dir.path(), &[]).unwrap();
        let raw = fs::read_to_string(dir.path().join(STORAGE_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 0);
        assert!(value["items"].is_array());
    }
}
