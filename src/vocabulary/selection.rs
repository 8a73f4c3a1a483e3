//! Word selection for practice sessions.
//!
//! Pure least-recently-used picking would hand back the same rotation on
//! every call, so the candidate pool oversamples the LRU prefix by half and
//! shuffles it before taking the requested count: still biased toward
//! under-practiced words, without being predictable.

use rand::seq::SliceRandom;
use rand::Rng;

use super::models::{WordRecord, WordSample};

/// Pick up to `count` samples, preferring records least recently used
/// according to `last_used`.
///
/// Records never used sort first; ties fall back to the date added, then to
/// storage order. Never-practiced records keep their slot through the
/// shuffle: the order stays random within each class, so a store where
/// everything (or nothing) has been practiced is a plain shuffled pool.
/// When the store holds fewer than `count` records the result is simply
/// shorter.
pub fn pick_lru_biased<R, F>(
    records: Vec<WordRecord>,
    last_used: F,
    count: usize,
    rng: &mut R,
) -> Vec<WordSample>
where
    R: Rng,
    F: Fn(&WordRecord) -> Option<f64>,
{
    let mut pool = records;
    pool.sort_by(|a, b| {
        last_used(a)
            .unwrap_or(0.0)
            .total_cmp(&last_used(b).unwrap_or(0.0))
            .then(a.ts_date_added.total_cmp(&b.ts_date_added))
    });
    pool.truncate(pool_size(count));
    pool.shuffle(rng);
    pool.sort_by_key(|r| last_used(r).is_some());
    pool.truncate(count);
    pool.into_iter().map(|r| r.ws).collect()
}

/// Candidate pool size: half again as large as the request, rounded up.
fn pool_size(count: usize) -> usize {
    (count * 3).div_ceil(2)
}
