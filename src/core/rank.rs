//! Batch ranking: stable shelf-order positions mapped back onto records.

use tracing::debug;

use crate::core::normalize;
use crate::core::record::{RankedRecord, Record};
use crate::core::sort_key::sort_key;

/// Compute each record's 1-based position under ascending sort-key order.
///
/// Ties keep ingestion order (the index sort is stable), and the returned
/// vector is indexed by ingestion order, not by sorted order.
pub fn assign_ranks(records: &[Record]) -> Vec<usize> {
    // Pass one: key every record
    let keys: Vec<_> = records
        .iter()
        .map(|record| sort_key(record.ranking_source()))
        .collect();

    // Pass two: stable index sort, then map positions back by identity
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));

    let mut ranks = vec![0; records.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

/// Normalize a batch and annotate every record with its shelf rank.
///
/// Output order is ingestion order; the rank is metadata, not a
/// reordering. Callers wanting shelf order must sort by the rank
/// themselves.
pub fn process_batch(records: Vec<Record>) -> Vec<RankedRecord> {
    let records = normalize::clean_batch(records);
    let ranks = assign_ranks(&records);
    debug!(rows = records.len(), "assigned shelf ranks");

    records
        .into_iter()
        .zip(ranks)
        .map(|(record, rank)| RankedRecord { record, rank })
        .collect()
}
