//! Basic field-level cleaning applied before validation and dedup.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Config;
use crate::dataset::Dataset;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Returns a cleaned copy of the dataset: `name` trimmed, `country`
/// trimmed and uppercased (unless disabled), `phone` stripped of all
/// whitespace. Columns the dataset does not have are skipped.
pub fn basic_cleaning(dataset: &Dataset, config: &Config) -> Dataset {
    let mut cleaned = dataset.clone();

    cleaned.update_column("name", |value| value.trim().to_string());

    if config.country_rules.uppercase {
        cleaned.update_column("country", |value| value.trim().to_uppercase());
    }

    cleaned.update_column("phone", |value| {
        WHITESPACE_RE.replace_all(value, "").into_owned()
    });

    cleaned
}
