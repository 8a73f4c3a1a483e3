//! Locations of the store files.
//!
//! All stores live under a single db directory. The base directory can be
//! overridden with the `AIVOC_DATA_DIR` environment variable; by default it
//! is the user's home directory.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::mastered::MasteredWordStore;
use crate::storage::{Result, StorageError};
use crate::system::{InternalStateStore, SystemSettingsStore};
use crate::vocabulary::WordStore;

const DATA_DIR_ENV: &str = "AIVOC_DATA_DIR";
const DB_DIR_NAME: &str = ".aivoc_db";

const WORD_FILE: &str = "word.json";
const MASTERED_WORD_FILE: &str = "mastered_word.json";
const INTERNAL_STATE_FILE: &str = "internal.json";
const SETTINGS_FILE: &str = "settings.json";

/// Base directory holding the db directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir().ok_or(StorageError::DataDirNotFound)
}

/// Directory holding the store files.
pub fn db_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(DB_DIR_NAME))
}

/// Create the db directory if needed and return it.
pub fn ensure_db_dir() -> Result<PathBuf> {
    let dir = db_path()?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn open_word_store() -> Result<WordStore> {
    WordStore::open(ensure_db_dir()?.join(WORD_FILE))
}

pub fn open_mastered_word_store() -> Result<MasteredWordStore> {
    MasteredWordStore::open(ensure_db_dir()?.join(MASTERED_WORD_FILE))
}

pub fn open_internal_state_store() -> Result<InternalStateStore> {
    InternalStateStore::open(ensure_db_dir()?.join(INTERNAL_STATE_FILE))
}

pub fn open_system_settings_store() -> Result<SystemSettingsStore> {
    SystemSettingsStore::open(ensure_db_dir()?.join(SETTINGS_FILE))
}
