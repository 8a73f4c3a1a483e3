//! The vocabulary book store.
//!
//! One JSON file of word documents, loaded once at open and kept resident;
//! every mutation rewrites the file before returning. Documents round-trip
//! in their stored shape — see the migration module for how old formats are
//! normalized on read.

use std::collections::HashSet;
use std::path::PathBuf;

use rand::Rng;

use super::migration::{self, RawWordRecord};
use super::models::{WordProgress, WordRecord, WordSample};
use super::selection;
use crate::storage::{load_table, now_ts, save_table, Result};

/// Stores every word in the vocabulary book together with its learning
/// progress.
pub struct WordStore {
    file_path: PathBuf,
    docs: Vec<RawWordRecord>,
}

impl WordStore {
    /// Open the store backed by `file_path`. A missing file is an empty book.
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        let docs = load_table(&file_path)?;
        log::debug!("word store: loaded {} documents from {:?}", docs.len(), file_path);
        Ok(Self { file_path, docs })
    }

    fn flush(&self) -> Result<()> {
        save_table(&self.file_path, &self.docs)
    }

    fn position(&self, word: &str) -> Option<usize> {
        self.docs.iter().position(|d| d.ws.word == word)
    }

    /// Add a word to the book, dated now.
    ///
    /// Re-adding an existing word replaces its sample in place and resets
    /// the learning progress.
    pub fn add(&mut self, sample: WordSample) -> Result<()> {
        self.add_with_date(sample, now_ts())
    }

    /// Add a word with an explicit date-added timestamp. Bulk imports keep
    /// historical dates this way.
    pub fn add_with_date(&mut self, sample: WordSample, ts_date_added: f64) -> Result<()> {
        let wp = WordProgress::new(&sample.word);
        let raw = migration::to_raw(&WordRecord {
            ws: sample,
            wp,
            ts_date_added,
        });
        match self.position(&raw.ws.word) {
            Some(idx) => self.docs[idx] = raw,
            None => self.docs.push(raw),
        }
        self.flush()
    }

    /// Look up a word by its exact stored key.
    pub fn get(&self, word: &str) -> Option<WordRecord> {
        self.position(word).map(|idx| migration::normalize(&self.docs[idx]))
    }

    pub fn exists(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Remove a word, reporting whether anything was removed. Removing an
    /// absent word is a no-op.
    pub fn remove(&mut self, word: &str) -> Result<bool> {
        match self.position(word) {
            Some(idx) => {
                self.docs.remove(idx);
                self.flush()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn count(&self) -> usize {
        self.docs.len()
    }

    /// All records in storage order.
    pub fn all(&self) -> impl Iterator<Item = WordRecord> + '_ {
        self.docs.iter().map(migration::normalize)
    }

    /// The subset of `words` already present in the book. Upstream marks
    /// these as known so extraction skips them.
    pub fn filter(&self, words: &HashSet<String>) -> HashSet<String> {
        words.iter().filter(|w| self.exists(w.as_str())).cloned().collect()
    }

    /// Case-insensitive substring search on the word key, oldest first.
    ///
    /// The sequence is unpaginated; callers cap how much of it they consume.
    pub fn search(&self, keyword: &str) -> impl Iterator<Item = WordRecord> {
        let keyword = keyword.to_lowercase();
        let mut results: Vec<WordRecord> = self.all().collect();
        results.sort_by(|a, b| a.ts_date_added.total_cmp(&b.ts_date_added));
        results
            .into_iter()
            .filter(move |r| r.ws.word.to_lowercase().contains(&keyword))
    }

    /// Latest added words, ascending by date added. With a limit the window
    /// covers the most recently added words but stays oldest to newest;
    /// callers wanting newest-first reverse it themselves.
    pub fn list_latest(&self, limit: Option<usize>) -> Vec<WordRecord> {
        let mut results: Vec<WordRecord> = self.all().collect();
        results.sort_by(|a, b| a.ts_date_added.total_cmp(&b.ts_date_added));
        match limit {
            Some(n) if n < results.len() => results.split_off(results.len() - n),
            _ => results,
        }
    }

    /// Pick words for writing a story.
    pub fn pick_story_words(&self, count: usize) -> Vec<WordSample> {
        self.pick_story_words_with_rng(count, &mut rand::thread_rng())
    }

    /// Pick story words with a caller-supplied random source.
    pub fn pick_story_words_with_rng<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<WordSample> {
        selection::pick_lru_biased(self.all().collect(), |r| r.wp.ts_date_storied, count, rng)
    }

    /// Pick words for generating a quiz.
    pub fn pick_quiz_words(&self, count: usize) -> Vec<WordSample> {
        self.pick_quiz_words_with_rng(count, &mut rand::thread_rng())
    }

    /// Pick quiz words with a caller-supplied random source.
    pub fn pick_quiz_words_with_rng<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<WordSample> {
        selection::pick_lru_biased(self.all().collect(), |r| r.wp.ts_date_quiz, count, rng)
    }

    /// Bump the story counters for words just used, so the next pick
    /// reaches for different ones. Words no longer in the book are skipped.
    pub fn update_story_words(&mut self, words: &[WordSample]) -> Result<()> {
        let now = now_ts();
        for w in words {
            if let Some(idx) = self.position(&w.word) {
                let wp = &mut self.docs[idx].wp;
                wp.storied_cnt += 1;
                wp.ts_date_storied = Some(now);
            }
        }
        self.flush()
    }

    /// Bump the quiz counters for words just used. Words no longer in the
    /// book are skipped.
    pub fn update_quiz_words(&mut self, words: &[WordSample]) -> Result<()> {
        let now = now_ts();
        for w in words {
            if let Some(idx) = self.position(&w.word) {
                let wp = &mut self.docs[idx].wp;
                wp.quiz_cnt += 1;
                wp.ts_date_quiz = Some(now);
            }
        }
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn create_test_store() -> (WordStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = WordStore::open(temp_dir.path().join("word.json")).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_add_and_get() {
        let (mut store, _temp) = create_test_store();
        store.add(WordSample::make_empty("program")).unwrap();

        let record = store.get("program").unwrap();
        assert_eq!(record.word(), "program");
        assert!(record.ts_date_added > 0.0);
        assert!(store.get("python").is_none());
    }

    #[test]
    fn test_add_replaces_and_resets_progress() {
        let (mut store, _temp) = create_test_store();
        store.add(WordSample::make_empty("program")).unwrap();
        store.add(WordSample::make_empty("python")).unwrap();

        let picked = vec![store.get("program").unwrap().ws];
        store.update_story_words(&picked).unwrap();
        store.update_quiz_words(&picked).unwrap();
        assert_eq!(store.get("program").unwrap().wp.storied_cnt, 1);

        let mut refreshed = WordSample::make_empty("program");
        refreshed.pronunciation = "/ˈproʊɡræm/".to_string();
        store.add(refreshed).unwrap();

        assert_eq!(store.count(), 2);
        let record = store.get("program").unwrap();
        assert_eq!(record.ws.pronunciation, "/ˈproʊɡræm/");
        assert_eq!(record.wp.quiz_cnt, 0);
        assert_eq!(record.wp.storied_cnt, 0);
        assert!(record.wp.ts_date_quiz.is_none());
        assert!(record.wp.ts_date_storied.is_none());
    }

    #[test]
    fn test_upsert_keeps_storage_order() {
        let (mut store, _temp) = create_test_store();
        store.add(WordSample::make_empty("program")).unwrap();
        store.add(WordSample::make_empty("python")).unwrap();
        store.add(WordSample::make_empty("program")).unwrap();

        let words: Vec<String> = store.all().map(|r| r.word().to_string()).collect();
        assert_eq!(words, vec!["program", "python"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (mut store, _temp) = create_test_store();
        store.add(WordSample::make_empty("program")).unwrap();

        assert!(store.remove("program").unwrap());
        assert_eq!(store.count(), 0);
        assert!(!store.remove("program").unwrap());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_filter() {
        let (mut store, _temp) = create_test_store();
        store.add(WordSample::make_empty("program")).unwrap();
        store.add(WordSample::make_empty("python")).unwrap();

        let candidates: HashSet<String> =
            ["foo", "python", "bar"].iter().map(|s| s.to_string()).collect();
        let known = store.filter(&candidates);
        assert_eq!(known, ["python".to_string()].into_iter().collect());
    }

    #[test]
    fn test_search_is_case_insensitive_and_sorted() {
        let (mut store, _temp) = create_test_store();
        store.add_with_date(WordSample::make_empty("pyramid"), 3.0).unwrap();
        store.add_with_date(WordSample::make_empty("python"), 1.0).unwrap();
        store.add_with_date(WordSample::make_empty("program"), 2.0).unwrap();

        let hits: Vec<String> = store.search("Py").map(|r| r.word().to_string()).collect();
        assert_eq!(hits, vec!["python", "pyramid"]);

        // Re-invoking re-scans from the start.
        assert_eq!(store.search("Py").count(), 2);
    }

    #[test]
    fn test_list_latest_windowing() {
        let (mut store, _temp) = create_test_store();
        for i in 0..50 {
            store
                .add_with_date(WordSample::make_empty(&format!("word{}", i)), 1000.0 + i as f64)
                .unwrap();
        }

        let latest = store.list_latest(Some(10));
        assert_eq!(latest.len(), 10);
        for (i, record) in latest.iter().enumerate() {
            assert_eq!(record.word(), format!("word{}", i + 40));
        }

        assert_eq!(store.list_latest(None).len(), 50);
        assert_eq!(store.list_latest(Some(100)).len(), 50);
    }

    #[test]
    fn test_story_pick_then_update_deprioritizes() {
        let (mut store, _temp) = create_test_store();
        store.add(WordSample::make_empty("python")).unwrap();
        store.add(WordSample::make_empty("program")).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let words = store.pick_story_words_with_rng(1, &mut rng);
        assert_eq!(words.len(), 1);
        store.update_story_words(&words).unwrap();

        let record = store.get(&words[0].word).unwrap();
        assert_eq!(record.wp.storied_cnt, 1);
        assert!(record.wp.ts_date_storied.is_some());

        // With two candidates the just-used word always loses the next pick.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let next = store.pick_story_words_with_rng(1, &mut rng);
            assert_eq!(next.len(), 1);
            assert_ne!(next[0].word, words[0].word, "seed {}", seed);
        }
    }

    #[test]
    fn test_quiz_pick_then_update_deprioritizes() {
        let (mut store, _temp) = create_test_store();
        for s in "python program language is easy to read and write".split(' ') {
            store.add(WordSample::make_empty(s)).unwrap();
        }

        let mut rng = StdRng::seed_from_u64(3);
        let words = store.pick_quiz_words_with_rng(3, &mut rng);
        assert_eq!(words.len(), 3);
        store.update_quiz_words(&words).unwrap();

        for w in &words {
            let record = store.get(&w.word).unwrap();
            assert_eq!(record.wp.quiz_cnt, 1);
            assert!(record.wp.ts_date_quiz.is_some());
        }

        // Story progress is untouched by quiz updates.
        assert!(store.all().all(|r| r.wp.storied_cnt == 0));
    }

    #[test]
    fn test_update_skips_removed_words() {
        let (mut store, _temp) = create_test_store();
        store.add(WordSample::make_empty("python")).unwrap();

        let ghost = vec![WordSample::make_empty("gone")];
        store.update_story_words(&ghost).unwrap();
        assert_eq!(store.count(), 1);
        assert_eq!(store.get("python").unwrap().wp.storied_cnt, 0);
    }

    #[test]
    fn test_store_persists_across_open() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("word.json");

        let mut store = WordStore::open(&path).unwrap();
        store.add_with_date(WordSample::make_empty("python"), 1000.0).unwrap();
        let picked = vec![store.get("python").unwrap().ws];
        store.update_quiz_words(&picked).unwrap();
        drop(store);

        let reopened = WordStore::open(&path).unwrap();
        assert_eq!(reopened.count(), 1);
        let record = reopened.get("python").unwrap();
        assert_eq!(record.ts_date_added, 1000.0);
        assert_eq!(record.wp.quiz_cnt, 1);
    }

    #[test]
    fn test_legacy_documents_load_and_survive_writes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("word.json");
        std::fs::write(
            &path,
            r#"[{
                "ws": {
                    "word": "program",
                    "word_meaning": "a set of instructions",
                    "pronunciation": "",
                    "orig_text": "",
                    "translated_text": ""
                },
                "wp": {"word": "program", "quiz_cnt": 0, "ts_date_quiz": null,
                       "storied_cnt": 0, "ts_date_storied": null},
                "ts_date_added": 1000.0
            }]"#,
        )
        .unwrap();

        let mut store = WordStore::open(&path).unwrap();
        let record = store.get("program").unwrap();
        assert_eq!(record.ws.word_normal, None);
        assert_eq!(record.ws.definitions, vec!["a set of instructions"]);

        // An unrelated write keeps the legacy document in its stored shape.
        store.add_with_date(WordSample::make_empty("python"), 2000.0).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let docs: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(docs[0]["ws"]["word_meaning"], "a set of instructions");
        assert!(docs[0]["ws"].get("definitions").is_none());

        // Re-adding the word rewrites it in the current shape.
        store.add_with_date(WordSample::make_empty("program"), 1000.0).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let docs: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(docs[0]["ws"].get("word_meaning").is_none());
        assert!(docs[0]["ws"].get("definitions").is_some());
    }
}
