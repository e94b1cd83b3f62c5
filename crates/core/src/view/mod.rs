//! View-state derivation pipeline.
//!
//! ```text
//! record store ──► predicate ──► filtered subset ──► sort ──► projected view
//!      │
//!      └─────────► aggregate ──► summary stats
//! ```
//!
//! Every stage borrows the store and returns new sequences of references;
//! nothing here mutates or takes ownership of records. Statistics are always
//! computed from the full store, never from a projected view.

pub mod aggregate;
pub mod params;
pub mod predicate;
pub mod project;
pub mod sort;

pub use aggregate::{summarize_inbox, summarize_quotations, InboxStats, QuotationStats};
pub use params::{
    CategoryFilter, FilterAnomaly, FilterParams, FilterValue, RawFilterParams, SortKey, SortOrder,
};
pub use predicate::matches;
pub use project::project;
pub use sort::sort_records;

use crate::priority::Priority;
use crate::types::Timestamp;

/// A record that can flow through the pipeline.
pub trait ViewRecord {
    /// The type/status dimension a caller can filter on.
    type Category: FilterValue;

    /// Fields searched by case-insensitive substring. Sequence fields
    /// (destinations, tags) contribute one entry per element.
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> Self::Category;

    /// Records without a priority dimension are never constrained by a
    /// priority filter.
    fn priority(&self) -> Option<Priority> {
        None
    }

    fn created_at(&self) -> Timestamp;

    /// Monetary value used by [`SortKey::Value`].
    fn sort_value(&self) -> Option<f64> {
        None
    }

    /// Display name used by [`SortKey::Name`].
    fn sort_name(&self) -> &str;
}
