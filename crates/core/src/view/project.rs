//! Filter + sort orchestration.

use super::params::FilterParams;
use super::predicate::matches_lowered;
use super::sort::sort_records;
use super::ViewRecord;

/// Derive the displayed sequence: records admitted by `params`, stably
/// ordered by `params.sort_by` / `params.sort_order`.
///
/// Pure: the store is only borrowed, and the same arguments always yield
/// the same sequence.
pub fn project<'a, R: ViewRecord>(
    records: &'a [R],
    params: &FilterParams<R::Category>,
) -> Vec<&'a R> {
    let needle = params.search_term.to_lowercase();
    let filtered: Vec<&R> = records
        .iter()
        .filter(|record| matches_lowered(*record, params, &needle))
        .collect();

    tracing::debug!(
        total = records.len(),
        matched = filtered.len(),
        sort_by = params.sort_by.as_str(),
        sort_order = params.sort_order.as_str(),
        "Projected view"
    );

    sort_records(filtered, params.sort_by, params.sort_order)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
