//! Canonical comparison forms derived from a record's key fields.
//!
//! Exact grouping and fuzzy matching must normalize identically per field:
//! a blank or missing cell becomes the empty string, everything else is
//! trimmed and lowercased. The tuple form is the exact-group identity; the
//! joined form is the comparison text fed to the similarity scorer.

use crate::dataset::Dataset;

/// Separator between field values in the joined comparison text.
pub const FIELD_SEPARATOR: &str = " | ";

pub fn normalize_value(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

/// Ordered tuple of normalized key-field values for one record.
pub fn exact_key_tuple(dataset: &Dataset, row: usize, keys: &[String]) -> Vec<String> {
    keys.iter()
        .map(|key| normalize_value(dataset.value(row, key)))
        .collect()
}

/// Normalized key-field values joined with `" | "`, preserving field order.
pub fn comparison_text(dataset: &Dataset, row: usize, keys: &[String]) -> String {
    exact_key_tuple(dataset, row, keys).join(FIELD_SEPARATOR)
}
