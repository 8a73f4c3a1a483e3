//! Single-document stores for settings and internal state.
//!
//! Each file holds at most one document keyed by a fixed sentinel name.
//! Reading a store that has never been written returns default values,
//! never an error; writing replaces the whole document.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::models::{InternalState, SystemSettings, DEFAULT_DOC_NAME};
use crate::storage::{load_table, save_table, Result};

/// Stores the internal state of the tool itself.
pub struct InternalStateStore {
    file_path: PathBuf,
    docs: Vec<InternalState>,
}

impl InternalStateStore {
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        let docs = load_table(&file_path)?;
        Ok(Self { file_path, docs })
    }

    pub fn get_internal_state(&self) -> InternalState {
        self.docs
            .iter()
            .find(|d| d.name == DEFAULT_DOC_NAME)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_internal_state(&mut self, state: &InternalState) -> Result<()> {
        let mut doc = state.clone();
        doc.name = DEFAULT_DOC_NAME.to_string();
        match self.docs.iter().position(|d| d.name == DEFAULT_DOC_NAME) {
            Some(idx) => self.docs[idx] = doc,
            None => self.docs.push(doc),
        }
        save_table(&self.file_path, &self.docs)
    }
}

/// The settings document as stored: the sentinel name plus the settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SettingsDoc {
    name: String,
    #[serde(default)]
    system_settings: SystemSettings,
}

/// Stores the user-facing system settings.
pub struct SystemSettingsStore {
    file_path: PathBuf,
    docs: Vec<SettingsDoc>,
}

impl SystemSettingsStore {
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        let docs = load_table(&file_path)?;
        Ok(Self { file_path, docs })
    }

    pub fn get_system_settings(&self) -> SystemSettings {
        self.docs
            .iter()
            .find(|d| d.name == DEFAULT_DOC_NAME)
            .map(|d| d.system_settings.clone())
            .unwrap_or_default()
    }

    pub fn set_system_settings(&mut self, settings: &SystemSettings) -> Result<()> {
        let doc = SettingsDoc {
            name: DEFAULT_DOC_NAME.to_string(),
            system_settings: settings.clone(),
        };
        match self.docs.iter().position(|d| d.name == DEFAULT_DOC_NAME) {
            Some(idx) => self.docs[idx] = doc,
            None => self.docs.push(doc),
        }
        save_table(&self.file_path, &self.docs)
    }
}
