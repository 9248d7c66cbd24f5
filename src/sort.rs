use crate::types::EndpointRecord;

/// Returns a copy of `records` ordered by path.
///
/// Plain lexicographic comparison of the path strings, no locale or
/// number-aware collation. Records with equal paths keep their relative order.
pub fn sort_by_path(records: &[EndpointRecord]) -> Vec<EndpointRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.path.cmp(&b.path));
    sorted
}
