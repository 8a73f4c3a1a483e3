//! On-disk word document shapes and their upgrade path.
//!
//! Word documents written by old releases keep loading forever: every read
//! materializes the raw document through an ordered chain of normalization
//! steps, one per historical format change. The chain only fixes the
//! in-memory view — the file keeps whatever shape it has until the record
//! is next written.

use serde::{Deserialize, Serialize};

use super::models::{WordProgress, WordRecord, WordSample};

/// The `ws` field as stored, permissive enough for every historical shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawWordSample {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_normal: Option<String>,
    #[serde(default)]
    pub pronunciation: String,
    /// Absent in formats predating multi-definition support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<String>>,
    /// Single meaning string written by the earliest formats.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub word_meaning: String,
    #[serde(default)]
    pub orig_text: String,
    #[serde(default)]
    pub translated_text: String,
}

/// A word document exactly as stored in the table file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawWordRecord {
    pub ws: RawWordSample,
    pub wp: WordProgress,
    pub ts_date_added: f64,
}

/// One normalization step. `apply` upgrades a single historical shape in
/// place and reports whether it changed anything.
struct MigrationStep {
    /// Last release series that wrote the shape this step upgrades.
    tag: &'static str,
    apply: fn(&mut RawWordSample) -> bool,
}

const CHAIN: &[MigrationStep] = &[
    MigrationStep {
        tag: "0.2-single-meaning",
        apply: wrap_legacy_meaning,
    },
    MigrationStep {
        tag: "0.3-no-normal-form",
        apply: default_word_normal,
    },
];

/// Formats up to 0.2 stored one `word_meaning` string instead of a list.
fn wrap_legacy_meaning(ws: &mut RawWordSample) -> bool {
    if ws.definitions.is_some() {
        return false;
    }
    ws.definitions = if ws.word_meaning.is_empty() {
        Some(Vec::new())
    } else {
        Some(vec![ws.word_meaning.clone()])
    };
    true
}

/// Formats up to 0.3 had no `word_normal` field; deserialization already
/// yields `None` for it, which is the wanted "unknown" value. The step is
/// kept so the format history reads top to bottom and the next field change
/// is one more entry.
fn default_word_normal(_ws: &mut RawWordSample) -> bool {
    false
}

/// Upgrade a raw document into the current in-memory shape.
pub fn normalize(raw: &RawWordRecord) -> WordRecord {
    let mut ws = raw.ws.clone();
    for step in CHAIN {
        if (step.apply)(&mut ws) {
            log::debug!("word {:?}: applied schema step {}", ws.word, step.tag);
        }
    }

    WordRecord {
        ws: WordSample {
            word: ws.word,
            word_normal: ws.word_normal,
            pronunciation: ws.pronunciation,
            definitions: ws.definitions.unwrap_or_default(),
            orig_text: ws.orig_text,
            translated_text: ws.translated_text,
        },
        wp: raw.wp.clone(),
        ts_date_added: raw.ts_date_added,
    }
}

/// Build the stored document for a current-shape record.
pub fn to_raw(record: &WordRecord) -> RawWordRecord {
    RawWordRecord {
        ws: RawWordSample {
            word: record.ws.word.clone(),
            word_normal: record.ws.word_normal.clone(),
            pronunciation: record.ws.pronunciation.clone(),
            definitions: Some(record.ws.definitions.clone()),
            word_meaning: String::new(),
            orig_text: record.ws.orig_text.clone(),
            translated_text: record.ws.translated_text.clone(),
        },
        wp: record.wp.clone(),
        ts_date_added: record.ts_date_added,
    }
}
