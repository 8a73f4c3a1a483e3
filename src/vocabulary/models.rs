//! Data models for the vocabulary book.

use chrono::{DateTime, Local, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::storage::now_ts;

/// A single definition line split into its part-of-speech tag and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDefinition {
    pub part_of_speech: String,
    pub definition: String,
}

impl WordDefinition {
    /// Parse a definition line such as `"[noun] a sequence of sounds"`.
    /// Lines without the prefix get an empty part of speech.
    pub fn from_text(text: &str) -> Self {
        let re = Regex::new(r"^\[([a-zA-Z]+)\]").unwrap();
        match re.captures(text) {
            Some(caps) => {
                let prefix = caps.get(0).unwrap();
                Self {
                    part_of_speech: caps[1].to_string(),
                    definition: text[prefix.end()..].trim().to_string(),
                }
            }
            None => Self {
                part_of_speech: String::new(),
                definition: text.to_string(),
            },
        }
    }
}

/// A word sample produced by the translation flow, ready to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSample {
    /// Canonical lookup key, lower cased by the caller.
    pub word: String,
    /// Dictionary base form. `None` means unknown; treat as `word` itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_normal: Option<String>,
    pub pronunciation: String,
    /// Definition lines, each optionally prefixed with a `[pos]` tag.
    #[serde(default)]
    pub definitions: Vec<String>,
    /// The sentence the word was extracted from.
    pub orig_text: String,
    pub translated_text: String,
}

impl WordSample {
    /// Make a sample that only carries the word itself.
    pub fn make_empty(word: &str) -> Self {
        Self {
            word: word.to_string(),
            word_normal: Some(word.to_string()),
            pronunciation: String::new(),
            definitions: Vec::new(),
            orig_text: String::new(),
            translated_text: String::new(),
        }
    }

    pub fn get_structured_definitions(&self) -> Vec<WordDefinition> {
        self.definitions
            .iter()
            .map(|d| WordDefinition::from_text(d))
            .collect()
    }

    /// All definitions joined into one display string, prefixes stripped.
    pub fn get_definitions_str(&self) -> String {
        self.get_structured_definitions()
            .iter()
            .map(|d| d.definition.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Learning progress counters for one word.
///
/// Created fresh on every insert; only the `update_*` store operations
/// mutate it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordProgress {
    pub word: String,
    /// How many times the word was used in a quiz.
    #[serde(default)]
    pub quiz_cnt: u32,
    /// Last time it was used in a quiz, Unix seconds.
    #[serde(default)]
    pub ts_date_quiz: Option<f64>,
    /// How many times the word was woven into a story.
    #[serde(default)]
    pub storied_cnt: u32,
    /// Last time it was used in a story, Unix seconds.
    #[serde(default)]
    pub ts_date_storied: Option<f64>,
}

impl WordProgress {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            quiz_cnt: 0,
            ts_date_quiz: None,
            storied_cnt: 0,
            ts_date_storied: None,
        }
    }
}

/// The unit persisted and returned by every read operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub ws: WordSample,
    pub wp: WordProgress,
    /// When the word entered the book, Unix seconds. Set once at insertion.
    pub ts_date_added: f64,
}

impl WordRecord {
    /// Shortcut for the word key.
    pub fn word(&self) -> &str {
        &self.ws.word
    }

    /// Date added formatted for display, local time.
    pub fn date_added(&self) -> String {
        DateTime::<Utc>::from_timestamp(self.ts_date_added as i64, 0)
            .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }

    /// Coarse "3 days ago" rendering of the date added.
    pub fn date_added_ago(&self) -> String {
        format_ago((now_ts() - self.ts_date_added).max(0.0) as i64)
    }
}

fn format_ago(secs: i64) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const MONTH: i64 = 30 * DAY;
    const YEAR: i64 = 365 * DAY;

    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", n, unit)
        }
    };

    if secs < MINUTE {
        "just now".to_string()
    } else if secs < HOUR {
        plural(secs / MINUTE, "minute")
    } else if secs < DAY {
        plural(secs / HOUR, "hour")
    } else if secs < MONTH {
        plural(secs / DAY, "day")
    } else if secs < YEAR {
        plural(secs / MONTH, "month")
    } else {
        plural(secs / YEAR, "year")
    }
}
