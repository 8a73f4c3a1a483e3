//! Persistent local stores for a personal vocabulary-building tool.
//!
//! Four JSON-file backed stores: the vocabulary book itself (word samples
//! plus learning progress and practice selection), the set of already
//! mastered words, user settings, and internal tool state. Single user,
//! single process — callers own everything above the store layer, from
//! translation to export formatting.

pub mod config;
pub mod mastered;
pub mod storage;
pub mod system;
pub mod vocabulary;

pub use mastered::MasteredWordStore;
pub use storage::{Result, StorageError};
pub use system::{InternalState, InternalStateStore, SystemSettings, SystemSettingsStore};
pub use vocabulary::{WordProgress, WordRecord, WordSample, WordStore};
