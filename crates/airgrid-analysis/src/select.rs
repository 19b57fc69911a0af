use std::cmp::Ordering;

use crate::scorer::ScoredRecord;

pub const DEFAULT_TOP_N: usize = 5;

/// All records ordered best first (ascending score).
///
/// The sort is stable: tied records keep their input order.
#[must_use]
pub fn rank(scored: &[ScoredRecord]) -> Vec<&ScoredRecord> {
    let mut ranked: Vec<&ScoredRecord> = scored.iter().collect();
    // partial_cmp keeps -0.0 and 0.0 tied, unlike total_cmp.
    ranked.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    ranked
}

/// The `n` best records. Asking for more than exist returns them all.
#[must_use]
pub fn top_n(scored: &[ScoredRecord], n: usize) -> Vec<&ScoredRecord> {
    let mut ranked = rank(scored);
    ranked.truncate(n);
    ranked
}
