//! Stable ordering of a filtered subset.
//!
//! Descending order is the reversed ascending comparator; there is no
//! separate descending code path. `slice::sort_by` is stable, so records
//! with equal keys keep their input order in both directions.

use std::cmp::Ordering;

use super::params::{SortKey, SortOrder};
use super::ViewRecord;

/// Ascending comparison of two records on `key`.
///
/// Records without a value for `key` compare equal to each other and after
/// every record that has one, so they trail in ascending order and lead in
/// descending order. Monetary values compare numerically: `-0.0` equals
/// `0.0`.
pub fn compare<R: ViewRecord>(a: &R, b: &R, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.created_at().cmp(&b.created_at()),
        SortKey::Value => compare_present(a.sort_value(), b.sort_value(), compare_amounts),
        SortKey::Name => compare_names(a.sort_name(), b.sort_name()),
        SortKey::Priority => compare_present(a.priority(), b.priority(), |x, y| x.cmp(y)),
    }
}

/// Return `records` stably ordered by `key` in `order`.
pub fn sort_records<'a, R: ViewRecord>(
    mut records: Vec<&'a R>,
    key: SortKey,
    order: SortOrder,
) -> Vec<&'a R> {
    records.sort_by(|a, b| {
        let ordering = compare(*a, *b, key);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    records
}

fn compare_present<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(&x, &y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Total order on amounts with `-0.0` folded into `0.0`.
fn compare_amounts(a: &f64, b: &f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Case-folded comparison, falling back to the raw strings so that names
/// differing only in case still order deterministically.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbox::test_support::message;
    use crate::priority::Priority;
    use crate::quotation::test_support::quote;
    use crate::quotation::{Quotation, QuotationStatus};

    fn ids<R: HasId>(records: &[&R]) -> Vec<String> {
        records.iter().map(|r| r.record_id().to_string()).collect()
    }

    trait HasId {
        fn record_id(&self) -> &str;
    }

    impl HasId for Quotation {
        fn record_id(&self) -> &str {
            &self.id
        }
    }

    impl HasId for crate::inbox::InboxMessage {
        fn record_id(&self) -> &str {
            &self.id
        }
    }

    /// Minimal record whose monetary value may be absent.
    struct Sparse(&'static str, Option<f64>);

    impl HasId for Sparse {
        fn record_id(&self) -> &str {
            self.0
        }
    }

    impl ViewRecord for Sparse {
        type Category = QuotationStatus;

        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }

        fn category(&self) -> QuotationStatus {
            QuotationStatus::Draft
        }

        fn created_at(&self) -> crate::types::Timestamp {
            chrono::DateTime::<chrono::Utc>::UNIX_EPOCH
        }

        fn sort_value(&self) -> Option<f64> {
            self.1
        }

        fn sort_name(&self) -> &str {
            self.0
        }
    }

    fn sample_quotes() -> Vec<Quotation> {
        vec![
            quote("Q1", 5000.0, "2024-01-01T00:00:00Z"),
            quote("Q2", 20000.0, "2024-01-10T00:00:00Z"),
            quote("Q3", 5000.0, "2024-01-05T00:00:00Z"),
        ]
    }

    // -- Value ---------------------------------------------------------------

    #[test]
    fn value_descending_keeps_input_order_for_ties() {
        let store = sample_quotes();
        let sorted = sort_records(store.iter().collect(), SortKey::Value, SortOrder::Descending);
        assert_eq!(ids(&sorted), vec!["Q2", "Q1", "Q3"]);
    }

    #[test]
    fn value_ascending_keeps_input_order_for_ties() {
        let store = sample_quotes();
        let sorted = sort_records(store.iter().collect(), SortKey::Value, SortOrder::Ascending);
        assert_eq!(ids(&sorted), vec!["Q1", "Q3", "Q2"]);
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        let store = vec![
            quote("A", -0.0, "2024-01-01T00:00:00Z"),
            quote("B", 0.0, "2024-01-02T00:00:00Z"),
        ];
        for q in &store {
            assert!(crate::quotation::validate_quotation(q).is_ok());
        }
        for order in [SortOrder::Descending, SortOrder::Ascending] {
            let sorted = sort_records(store.iter().collect(), SortKey::Value, order);
            assert_eq!(ids(&sorted), vec!["A", "B"], "order {order:?}");
        }
    }

    #[test]
    fn value_descending_is_non_increasing() {
        let mut store = sample_quotes();
        store.push(quote("Q4", 12500.5, "2024-01-02T00:00:00Z"));
        store.push(quote("Q5", 0.0, "2024-01-03T00:00:00Z"));
        let sorted = sort_records(store.iter().collect(), SortKey::Value, SortOrder::Descending);
        for pair in sorted.windows(2) {
            assert!(pair[0].total_value >= pair[1].total_value);
        }
    }

    #[test]
    fn records_without_value_keep_input_order() {
        let store = vec![
            message("b", "2024-03-02T00:00:00Z"),
            message("a", "2024-03-01T00:00:00Z"),
        ];
        let sorted = sort_records(store.iter().collect(), SortKey::Value, SortOrder::Descending);
        assert_eq!(ids(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn missing_values_trail_ascending_and_lead_descending() {
        let store = vec![Sparse("with", Some(1.0)), Sparse("without", None)];
        let asc = sort_records(store.iter().collect(), SortKey::Value, SortOrder::Ascending);
        assert_eq!(ids(&asc), vec!["with", "without"]);
        let desc = sort_records(store.iter().collect(), SortKey::Value, SortOrder::Descending);
        assert_eq!(ids(&desc), vec!["without", "with"]);
    }

    // -- Date ----------------------------------------------------------------

    #[test]
    fn date_descending_is_newest_first() {
        let store = sample_quotes();
        let sorted = sort_records(store.iter().collect(), SortKey::Date, SortOrder::Descending);
        assert_eq!(ids(&sorted), vec!["Q2", "Q3", "Q1"]);
    }

    #[test]
    fn date_ascending_is_oldest_first() {
        let store = sample_quotes();
        let sorted = sort_records(store.iter().collect(), SortKey::Date, SortOrder::Ascending);
        assert_eq!(ids(&sorted), vec!["Q1", "Q3", "Q2"]);
    }

    #[test]
    fn date_compares_instants_not_strings() {
        let store = vec![
            quote("later", 1.0, "2024-01-01T10:00:00+02:00"),
            quote("earlier", 1.0, "2024-01-01T09:00:00Z"),
        ];
        // 10:00+02:00 is 08:00Z, so "later" is actually earlier.
        let sorted = sort_records(store.iter().collect(), SortKey::Date, SortOrder::Ascending);
        assert_eq!(ids(&sorted), vec!["later", "earlier"]);
    }

    // -- Name ----------------------------------------------------------------

    #[test]
    fn name_sort_ignores_case() {
        let mut store = sample_quotes();
        store[0].customer.name = "zoe Martin".to_string();
        store[1].customer.name = "Anna Berg".to_string();
        store[2].customer.name = "marco Bianchi".to_string();
        let sorted = sort_records(store.iter().collect(), SortKey::Name, SortOrder::Ascending);
        assert_eq!(ids(&sorted), vec!["Q2", "Q3", "Q1"]);
    }

    // -- Priority ------------------------------------------------------------

    #[test]
    fn priority_descending_puts_urgent_first() {
        let mut store = vec![
            message("low", "2024-03-01T00:00:00Z"),
            message("urgent", "2024-03-01T00:00:00Z"),
            message("high", "2024-03-01T00:00:00Z"),
        ];
        store[0].priority = Priority::Low;
        store[1].priority = Priority::Urgent;
        store[2].priority = Priority::High;
        let sorted = sort_records(store.iter().collect(), SortKey::Priority, SortOrder::Descending);
        assert_eq!(ids(&sorted), vec!["urgent", "high", "low"]);
    }

    // -- Purity --------------------------------------------------------------

    #[test]
    fn sorting_does_not_touch_the_store() {
        let store = sample_quotes();
        let _ = sort_records(store.iter().collect(), SortKey::Value, SortOrder::Ascending);
        let order: Vec<&str> = store.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(order, vec!["Q1", "Q2", "Q3"]);
    }
}
