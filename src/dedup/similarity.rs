//! Token-order-insensitive similarity scoring.

use strsim::normalized_levenshtein;

/// Tokenize on whitespace, sort, and rejoin with single spaces.
fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Similarity score in 0..=100 between two comparison texts.
///
/// Both inputs are tokenized and sorted before a normalized Levenshtein
/// ratio is taken, so the score is invariant to token order ("rwe ag" vs
/// "ag rwe" scores 100) while differing token sets and multiplicities
/// still cost edits. Symmetric by construction.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let (sorted_a, sorted_b) = (sorted_tokens(a), sorted_tokens(b));
    (normalized_levenshtein(&sorted_a, &sorted_b) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_score_100() {
        assert_eq!(token_sort_ratio("rwe ag | essen | de", "rwe ag | essen | de"), 100);
    }

    #[test]
    fn token_order_is_ignored() {
        assert_eq!(token_sort_ratio("rwe ag", "ag rwe"), 100);
        assert_eq!(
            token_sort_ratio("rwe  ag | essen | de", "ag rwe | essen | de"),
            100
        );
    }

    #[test]
    fn intra_token_whitespace_collapses() {
        // Extra spaces vanish during tokenization
        assert_eq!(token_sort_ratio("rwe  ag", "rwe ag"), 100);
    }

    #[test]
    fn score_is_symmetric() {
        let pairs = [
            ("rwe ag | essen | de", "rwe se | essen | de"),
            ("bosch | stuttgart | de", "siemens | munich | de"),
            ("", "anna müller"),
        ];
        for (a, b) in pairs {
            assert_eq!(token_sort_ratio(a, b), token_sort_ratio(b, a));
        }
    }

    #[test]
    fn differing_token_sets_are_penalized() {
        let score = token_sort_ratio("acme gmbh essen", "acme gmbh berlin");
        assert!(score < 90, "score was {score}");
        assert_eq!(token_sort_ratio("rwe", "bosch"), 0);
    }

    #[test]
    fn differing_multiplicities_are_penalized() {
        let score = token_sort_ratio("acme acme gmbh", "acme gmbh");
        assert!(score < 100);
        assert!(score > 50);
    }
}
