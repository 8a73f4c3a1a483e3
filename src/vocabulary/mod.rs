//! The vocabulary book: word records, learning progress and practice
//! selection.

pub mod migration;
pub mod models;
pub mod selection;
pub mod storage;

pub use models::{WordDefinition, WordProgress, WordRecord, WordSample};
pub use storage::WordStore;
