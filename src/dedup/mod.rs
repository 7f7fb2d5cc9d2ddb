//! Duplicate detection over the cleaned dataset: exact key-tuple grouping
//! plus O(n²) pairwise fuzzy matching with score-based action
//! classification. Both entry points are pure functions of the dataset and
//! the configured key fields; they never touch ambient state.

pub mod exact;
pub mod fuzzy;
pub mod normalize;
pub mod similarity;

pub use exact::{find_exact_duplicates, ExactDuplicate};
pub use fuzzy::{find_fuzzy_duplicates, FuzzyPair};
pub use similarity::token_sort_ratio;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Disposition hint for a reported duplicate, derived solely from the
/// similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    MergeCandidate,
    Review,
    Ignore,
}

impl RecommendedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedAction::MergeCandidate => "merge_candidate",
            RecommendedAction::Review => "review",
            RecommendedAction::Ignore => "ignore",
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a similarity score (0-100). `Ignore` is only reachable when
/// the matcher runs with a threshold below 90; the full three-way split is
/// kept so lower thresholds keep working.
pub fn recommended_action(score: u8) -> RecommendedAction {
    if score >= 97 {
        RecommendedAction::MergeCandidate
    } else if score >= 90 {
        RecommendedAction::Review
    } else {
        RecommendedAction::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_boundaries() {
        assert_eq!(recommended_action(100), RecommendedAction::MergeCandidate);
        assert_eq!(recommended_action(97), RecommendedAction::MergeCandidate);
        assert_eq!(recommended_action(96), RecommendedAction::Review);
        assert_eq!(recommended_action(90), RecommendedAction::Review);
        assert_eq!(recommended_action(89), RecommendedAction::Ignore);
        assert_eq!(recommended_action(0), RecommendedAction::Ignore);
    }

    #[test]
    fn action_serializes_snake_case() {
        assert_eq!(RecommendedAction::MergeCandidate.as_str(), "merge_candidate");
        assert_eq!(
            serde_json::to_string(&RecommendedAction::Review).unwrap(),
            "\"review\""
        );
    }
}
