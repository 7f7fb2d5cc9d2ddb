//! Exact-duplicate grouping on normalized key tuples.

use serde::Serialize;
use std::collections::HashMap;

use super::normalize::exact_key_tuple;
use crate::dataset::Dataset;

/// One duplicate-flagged record. Every emitted record belongs to a group
/// of size >= 2 under the normalized key tuple; singletons never appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExactDuplicate {
    pub group_id: usize,
    pub row_index: usize,
    pub bp_id: String,
}

/// Group records sharing an identical normalized key tuple.
///
/// Group ids are assigned 1.. over the lexicographically sorted set of
/// distinct duplicate tuples, not encounter order, so identical input
/// yields identical ids even after the rows are permuted. An empty key
/// list disables the check and yields an empty table.
pub fn find_exact_duplicates(dataset: &Dataset, keys: &[String]) -> Vec<ExactDuplicate> {
    if keys.is_empty() {
        return Vec::new();
    }

    let tuples: Vec<Vec<String>> = (0..dataset.len())
        .map(|row| exact_key_tuple(dataset, row, keys))
        .collect();

    let mut counts: HashMap<&[String], usize> = HashMap::new();
    for tuple in &tuples {
        *counts.entry(tuple.as_slice()).or_insert(0) += 1;
    }

    // All cluster members are flagged, none is kept back as "the original".
    let mut distinct: Vec<&[String]> = Vec::new();
    for tuple in &tuples {
        if counts[tuple.as_slice()] >= 2 {
            distinct.push(tuple.as_slice());
        }
    }
    distinct.sort_unstable();
    distinct.dedup();

    let group_ids: HashMap<&[String], usize> = distinct
        .into_iter()
        .enumerate()
        .map(|(idx, tuple)| (tuple, idx + 1))
        .collect();

    let mut duplicates = Vec::new();
    for (row_index, tuple) in tuples.iter().enumerate() {
        if let Some(&group_id) = group_ids.get(tuple.as_slice()) {
            duplicates.push(ExactDuplicate {
                group_id,
                row_index,
                bp_id: dataset.bp_id(row_index).to_string(),
            });
        }
    }
    duplicates
}
