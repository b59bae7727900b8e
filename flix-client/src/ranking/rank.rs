//! Ordering of autocomplete results.

use crate::domain::SearchResult;

/// Rank search results by relevance, most relevant first.
///
/// The sort is stable: results with equal relevance keep the order the
/// API returned them in, since there is no meaningful secondary key.
pub fn rank_results(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut scored: Vec<(f64, SearchResult)> = results
        .into_iter()
        .map(|r| (r.relevance(), r))
        .collect();

    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));

    scored.into_iter().map(|(_, r)| r).collect()
}

/// The best suggestion from an already ranked list, if there is one.
pub fn best_match(ranked: &[SearchResult]) -> Option<&SearchResult> {
    ranked.first()
}
