//! Inclusion test for a single record.

use super::params::FilterParams;
use super::ViewRecord;

/// Whether `record` satisfies every active constraint in `params`.
///
/// - Search: an empty term matches; otherwise the lower-cased term must be a
///   substring of at least one search field.
/// - Category: `Any` matches; otherwise exact equality.
/// - Priority: no filter matches; otherwise equality with the record's
///   priority, if the record has one.
pub fn matches<R: ViewRecord>(record: &R, params: &FilterParams<R::Category>) -> bool {
    let needle = params.search_term.to_lowercase();
    matches_lowered(record, params, &needle)
}

/// [`matches`] with the search term already lower-cased, so a projection
/// lowers it once rather than per record.
pub(crate) fn matches_lowered<R: ViewRecord>(
    record: &R,
    params: &FilterParams<R::Category>,
    needle: &str,
) -> bool {
    matches_search(record, needle)
        && params.category.admits(&record.category())
        && matches_priority(record, params)
}

fn matches_search<R: ViewRecord>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

fn matches_priority<R: ViewRecord>(record: &R, params: &FilterParams<R::Category>) -> bool {
    match (params.priority, record.priority()) {
        (Some(wanted), Some(actual)) => wanted == actual,
        _ => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
