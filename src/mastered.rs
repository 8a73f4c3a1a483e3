//! Words the user already knows.
//!
//! Membership only, no metadata. The extraction flow filters its candidates
//! against this set so mastered words never come back as new-word
//! suggestions.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::{load_table, save_table, Result};

/// One mastered word as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MasteredWordDoc {
    word: String,
}

/// Flat set of words the user has marked as already known.
pub struct MasteredWordStore {
    file_path: PathBuf,
    docs: Vec<MasteredWordDoc>,
}

impl MasteredWordStore {
    /// Open the store backed by `file_path`. A missing file is an empty set.
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        let docs = load_table(&file_path)?;
        Ok(Self { file_path, docs })
    }

    fn flush(&self) -> Result<()> {
        save_table(&self.file_path, &self.docs)
    }

    /// Mark a word as mastered. Re-adding an existing word is a no-op.
    pub fn add(&mut self, word: &str) -> Result<()> {
        if !self.exists(word) {
            self.docs.push(MasteredWordDoc {
                word: word.to_string(),
            });
        }
        self.flush()
    }

    /// Unmark a word, reporting whether anything was removed.
    pub fn remove(&mut self, word: &str) -> Result<bool> {
        match self.docs.iter().position(|d| d.word == word) {
            Some(idx) => {
                self.docs.remove(idx);
                self.flush()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn exists(&self, word: &str) -> bool {
        self.docs.iter().any(|d| d.word == word)
    }

    /// All mastered words in storage order.
    pub fn all(&self) -> Vec<String> {
        self.docs.iter().map(|d| d.word.clone()).collect()
    }

    /// The subset of `words` that is mastered.
    pub fn filter(&self, words: &HashSet<String>) -> HashSet<String> {
        words.iter().filter(|w| self.exists(w.as_str())).cloned().collect()
    }
}
