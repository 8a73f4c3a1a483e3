//! Shared plumbing for the JSON-file backed stores.
//!
//! One store = one file holding a JSON array of documents. Array order is
//! storage order: loaders keep it, writers rewrite the whole array in one
//! synchronous flush.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Load a table file into memory. A missing or empty file is an empty table.
pub(crate) fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(&content)?)
}

/// Write the whole table back to disk, creating parent directories on demand.
pub(crate) fn save_table<T: Serialize>(path: &Path, docs: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_string_pretty(docs)?)?;
    Ok(())
}

/// Current time as Unix-epoch seconds, the timestamp unit used on disk.
pub(crate) fn now_ts() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let docs: Vec<String> = load_table(&temp_dir.path().join("none.json")).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/table.json");
        save_table(&path, &["a".to_string(), "b".to_string()]).unwrap();

        let docs: Vec<String> = load_table(&path).unwrap();
        assert_eq!(docs, vec!["a", "b"]);
    }

    #[test]
    fn test_now_ts_is_recent() {
        let ts = now_ts();
        assert!(ts > 1_600_000_000.0);
    }
}
