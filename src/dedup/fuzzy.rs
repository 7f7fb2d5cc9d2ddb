//! Pairwise fuzzy duplicate matching.

use serde::Serialize;
use tracing::debug;

use super::normalize::comparison_text;
use super::similarity::token_sort_ratio;
use super::{recommended_action, RecommendedAction};
use crate::dataset::Dataset;

/// A candidate duplicate pair with `row_i < row_j`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuzzyPair {
    pub row_i: usize,
    pub bp_id_i: String,
    pub row_j: usize,
    pub bp_id_j: String,
    pub score: u8,
    pub recommended_action: RecommendedAction,
}

/// Score every unordered record pair and report those at or above
/// `threshold`, in traversal order (i ascending, then j ascending).
///
/// Comparison texts are precomputed once per record; the pairwise scan
/// itself is an explicit O(n²) double loop. That is the accepted ceiling
/// for this stage: fine for a few hundred records, and past the low
/// thousands it needs a blocking/indexing layer first. Pairs where either
/// side's comparison text is empty carry no signal and are skipped. An
/// empty key list disables matching entirely.
pub fn find_fuzzy_duplicates(dataset: &Dataset, keys: &[String], threshold: u8) -> Vec<FuzzyPair> {
    if keys.is_empty() {
        return Vec::new();
    }

    let texts: Vec<String> = (0..dataset.len())
        .map(|row| comparison_text(dataset, row, keys))
        .collect();

    let mut pairs = Vec::new();
    for i in 0..dataset.len() {
        for j in (i + 1)..dataset.len() {
            if texts[i].is_empty() || texts[j].is_empty() {
                continue;
            }
            let score = token_sort_ratio(&texts[i], &texts[j]);
            if score >= threshold {
                debug!(row_i = i, row_j = j, score, "fuzzy candidate");
                pairs.push(FuzzyPair {
                    row_i: i,
                    bp_id_i: dataset.bp_id(i).to_string(),
                    row_j: j,
                    bp_id_j: dataset.bp_id(j).to_string(),
                    score,
                    recommended_action: recommended_action(score),
                });
            }
        }
    }
    pairs
}
