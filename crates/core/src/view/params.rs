//! Filter and sort parameters.
//!
//! [`FilterParams`] is the typed view state a screen holds for one view
//! instance. [`RawFilterParams`] is its untyped counterpart as it arrives
//! from a query string, command line or deserialised payload;
//! [`RawFilterParams::resolve`] converts one into the other, failing open on
//! anything it does not recognise.

use serde::{Deserialize, Serialize};

use crate::priority::Priority;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Sentinel meaning "no constraint on this dimension".
pub const FILTER_ANY: &str = "any";

/// Alternate spelling of [`FILTER_ANY`] used by some screens.
pub const FILTER_ALL: &str = "all";

pub const SORT_DATE: &str = "date";
pub const SORT_VALUE: &str = "value";
pub const SORT_NAME: &str = "name";
pub const SORT_PRIORITY: &str = "priority";

/// All valid sort keys.
pub const VALID_SORT_KEYS: &[&str] = &[SORT_DATE, SORT_VALUE, SORT_NAME, SORT_PRIORITY];

pub const ORDER_ASCENDING: &str = "ascending";
pub const ORDER_DESCENDING: &str = "descending";

// Anomaly dimension names.
pub const DIMENSION_PRIORITY: &str = "priority";
pub const DIMENSION_SORT_BY: &str = "sort_by";
pub const DIMENSION_SORT_ORDER: &str = "sort_order";

// ---------------------------------------------------------------------------
// Typed parameters
// ---------------------------------------------------------------------------

/// A category/status value that can be selected in a filter.
pub trait FilterValue: Copy + Eq + std::fmt::Debug {
    /// Name of the dimension, reported in [`FilterAnomaly::dimension`].
    const DIMENSION: &'static str;

    /// Parse a filter selection. `None` means unrecognised.
    fn parse_filter(s: &str) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Date,
    Value,
    Name,
    Priority,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => SORT_DATE,
            Self::Value => SORT_VALUE,
            Self::Name => SORT_NAME,
            Self::Priority => SORT_PRIORITY,
        }
    }

    /// Case-insensitive parse.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            SORT_DATE => Some(Self::Date),
            SORT_VALUE => Some(Self::Value),
            SORT_NAME => Some(Self::Name),
            SORT_PRIORITY => Some(Self::Priority),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => ORDER_ASCENDING,
            Self::Descending => ORDER_DESCENDING,
        }
    }

    /// Case-insensitive parse; accepts `asc`/`desc` shorthands.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            ORDER_ASCENDING | "asc" => Some(Self::Ascending),
            ORDER_DESCENDING | "desc" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// Constraint on the category/status dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    Any,
    Only(C),
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn admits(&self, value: &C) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

/// View state for one list screen.
///
/// The default selects everything, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams<C> {
    pub search_term: String,
    pub category: CategoryFilter<C>,
    pub priority: Option<Priority>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl<C> Default for FilterParams<C> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::Any,
            priority: None,
            sort_by: SortKey::Date,
            sort_order: SortOrder::Descending,
        }
    }
}

impl<C> FilterParams<C> {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: C) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn sorted_by(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = key;
        self.sort_order = order;
        self
    }
}

// ---------------------------------------------------------------------------
// Untyped boundary
// ---------------------------------------------------------------------------

/// A filter value that was ignored during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterAnomaly {
    pub dimension: &'static str,
    pub value: String,
}

/// Filter parameters exactly as supplied by an untyped caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilterParams {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub filter_type: String,
    #[serde(default)]
    pub priority_filter: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
}

impl RawFilterParams {
    /// Convert to typed parameters.
    ///
    /// Empty strings and the `any`/`all` sentinels leave a dimension
    /// inactive. An unrecognised value is logged, recorded as a
    /// [`FilterAnomaly`], and treated as inactive (or as the default sort
    /// key/order); it never excludes records.
    pub fn resolve<C: FilterValue>(&self) -> (FilterParams<C>, Vec<FilterAnomaly>) {
        let mut anomalies = Vec::new();
        let mut params = FilterParams::<C>::default().with_search(self.search_term.clone());

        if !is_sentinel(&self.filter_type) {
            match C::parse_filter(self.filter_type.trim()) {
                Some(category) => params.category = CategoryFilter::Only(category),
                None => anomalies.push(anomaly(C::DIMENSION, &self.filter_type)),
            }
        }

        if let Some(raw) = self.priority_filter.as_deref().filter(|p| !is_sentinel(p)) {
            match Priority::parse_loose(raw) {
                Some(priority) => params.priority = Some(priority),
                None => anomalies.push(anomaly(DIMENSION_PRIORITY, raw)),
            }
        }

        if let Some(raw) = self.sort_by.as_deref().filter(|s| !s.trim().is_empty()) {
            match SortKey::parse(raw) {
                Some(key) => params.sort_by = key,
                None => anomalies.push(anomaly(DIMENSION_SORT_BY, raw)),
            }
        }

        if let Some(raw) = self.sort_order.as_deref().filter(|s| !s.trim().is_empty()) {
            match SortOrder::parse(raw) {
                Some(order) => params.sort_order = order,
                None => anomalies.push(anomaly(DIMENSION_SORT_ORDER, raw)),
            }
        }

        (params, anomalies)
    }
}

fn is_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.is_empty()
        || value.eq_ignore_ascii_case(FILTER_ANY)
        || value.eq_ignore_ascii_case(FILTER_ALL)
}

fn anomaly(dimension: &'static str, value: &str) -> FilterAnomaly {
    tracing::warn!(dimension, value, "Ignoring unrecognised filter value");
    FilterAnomaly {
        dimension,
        value: value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
