//! Travel quotations: records, validation, cloning and day-by-day
//! itinerary editing.
//!
//! Like the rest of `core`, nothing here performs I/O; the caller owns the
//! quotation store and decides where edited or cloned quotations go.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{RecordId, Timestamp};
use crate::view::{FilterValue, ViewRecord};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_SENT: &str = "sent";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";
pub const STATUS_EXPIRED: &str = "expired";

/// All valid quotation statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_SENT,
    STATUS_APPROVED,
    STATUS_REJECTED,
    STATUS_EXPIRED,
];

/// Prefix added to the title of a cloned quotation.
pub const CLONE_TITLE_PREFIX: &str = "Copy of ";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    Draft,
    Sent,
    Approved,
    Rejected,
    Expired,
}

impl QuotationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => STATUS_DRAFT,
            Self::Sent => STATUS_SENT,
            Self::Approved => STATUS_APPROVED,
            Self::Rejected => STATUS_REJECTED,
            Self::Expired => STATUS_EXPIRED,
        }
    }

    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_DRAFT => Ok(Self::Draft),
            STATUS_SENT => Ok(Self::Sent),
            STATUS_APPROVED => Ok(Self::Approved),
            STATUS_REJECTED => Ok(Self::Rejected),
            STATUS_EXPIRED => Ok(Self::Expired),
            _ => Err(CoreError::Validation(format!(
                "Invalid quotation status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

impl FilterValue for QuotationStatus {
    const DIMENSION: &'static str = "status";

    fn parse_filter(s: &str) -> Option<Self> {
        Self::from_str_value(s).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// One day of a trip itinerary. `day_number` is 1-based and kept
/// contiguous by the editing methods on [`Quotation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day_number: u32,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub accommodation: Option<String>,
    #[serde(default)]
    pub meals: Vec<String>,
}

impl ItineraryDay {
    /// A day with no activities, accommodation or meals. The day number is
    /// assigned when it is added to a quotation.
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            day_number: 0,
            title: title.into(),
            location: location.into(),
            activities: Vec::new(),
            accommodation: None,
            meals: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: RecordId,
    pub title: String,
    pub status: QuotationStatus,
    pub customer: Customer,
    pub agent: String,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub total_value: f64,
    /// ISO 4217 code, e.g. `EUR`.
    pub currency: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub valid_until: Option<Timestamp>,
    /// Trip length in days.
    pub duration: u32,
    pub travelers: u32,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

impl ViewRecord for Quotation {
    type Category = QuotationStatus;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.id.as_str(),
            self.customer.name.as_str(),
            self.agent.as_str(),
        ];
        fields.extend(self.destinations.iter().map(String::as_str));
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> QuotationStatus {
        self.status
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn sort_value(&self) -> Option<f64> {
        Some(self.total_value)
    }

    fn sort_name(&self) -> &str {
        &self.customer.name
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check a single quotation's value and currency.
pub fn validate_quotation(quote: &Quotation) -> Result<(), CoreError> {
    if !quote.total_value.is_finite() || quote.total_value < 0.0 {
        return Err(CoreError::Validation(format!(
            "Quotation '{}' has invalid total value {}; must be a non-negative amount",
            quote.id, quote.total_value
        )));
    }
    if !is_currency_code(&quote.currency) {
        return Err(CoreError::Validation(format!(
            "Quotation '{}' has invalid currency '{}'; expected a three-letter ISO code",
            quote.id, quote.currency
        )));
    }
    Ok(())
}

/// Validate every quotation and reject duplicate ids.
pub fn validate_quotations(store: &[Quotation]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(store.len());
    for quote in store {
        validate_quotation(quote)?;
        if !seen.insert(quote.id.as_str()) {
            return Err(CoreError::Conflict(format!(
                "Duplicate quotation id '{}'",
                quote.id
            )));
        }
    }
    Ok(())
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

// ---------------------------------------------------------------------------
// Cloning
// ---------------------------------------------------------------------------

/// Start a new draft from a previous quotation.
///
/// Customer, destinations, tags, pricing and the full itinerary carry over.
/// The copy gets `new_id`, status `Draft`, `created_at = now`, no validity
/// date, and a title prefixed with [`CLONE_TITLE_PREFIX`].
pub fn clone_quotation(
    source: &Quotation,
    new_id: impl Into<RecordId>,
    now: Timestamp,
) -> Quotation {
    let mut copy = source.clone();
    copy.id = new_id.into();
    copy.title = format!("{CLONE_TITLE_PREFIX}{}", source.title);
    copy.status = QuotationStatus::Draft;
    copy.created_at = now;
    copy.valid_until = None;
    copy
}

// ---------------------------------------------------------------------------
// Itinerary editing
// ---------------------------------------------------------------------------

impl Quotation {
    /// Append a day. Returns its assigned day number.
    pub fn add_day(&mut self, day: ItineraryDay) -> u32 {
        self.itinerary.push(day);
        self.renumber_days();
        self.duration
    }

    /// Insert a day so that it becomes `day_number`. Days at or after that
    /// position shift back by one. `day_number` may be one past the end.
    pub fn insert_day(&mut self, day_number: u32, day: ItineraryDay) -> Result<(), CoreError> {
        let len = self.itinerary.len();
        if day_number == 0 || day_number as usize > len + 1 {
            return Err(CoreError::Validation(format!(
                "Cannot insert at day {day_number}; itinerary has {len} days"
            )));
        }
        self.itinerary.insert(day_number as usize - 1, day);
        self.renumber_days();
        Ok(())
    }

    /// Remove and return the given day.
    pub fn remove_day(&mut self, day_number: u32) -> Result<ItineraryDay, CoreError> {
        let index = self.day_index(day_number)?;
        let removed = self.itinerary.remove(index);
        self.renumber_days();
        Ok(removed)
    }

    /// Move a day to a new position, shifting the days in between.
    pub fn move_day(&mut self, from: u32, to: u32) -> Result<(), CoreError> {
        let from_index = self.day_index(from)?;
        let to_index = self.day_index(to)?;
        let day = self.itinerary.remove(from_index);
        self.itinerary.insert(to_index, day);
        self.renumber_days();
        Ok(())
    }

    /// Apply `edit` to the given day. The day number itself cannot be
    /// changed this way; use [`Quotation::move_day`].
    pub fn update_day(
        &mut self,
        day_number: u32,
        edit: impl FnOnce(&mut ItineraryDay),
    ) -> Result<(), CoreError> {
        let index = self.day_index(day_number)?;
        edit(&mut self.itinerary[index]);
        self.itinerary[index].day_number = day_number;
        Ok(())
    }

    fn day_index(&self, day_number: u32) -> Result<usize, CoreError> {
        let len = self.itinerary.len();
        if day_number == 0 || day_number as usize > len {
            return Err(CoreError::Validation(format!(
                "Day {day_number} is out of range; itinerary has {len} days"
            )));
        }
        Ok(day_number as usize - 1)
    }

    fn renumber_days(&mut self) {
        for (i, day) in self.itinerary.iter_mut().enumerate() {
            day.day_number = i as u32 + 1;
        }
        self.duration = self.itinerary.len() as u32;
    }
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Draft EUR quotation for two travellers with an empty itinerary.
    pub fn quote(id: &str, total_value: f64, created_at: &str) -> Quotation {
        Quotation {
            id: id.to_string(),
            title: format!("Trip {id}"),
            status: QuotationStatus::Draft,
            customer: Customer {
                name: "Customer".to_string(),
                email: None,
            },
            agent: "Agent".to_string(),
            destinations: Vec::new(),
            tags: Vec::new(),
            total_value,
            currency: "EUR".to_string(),
            created_at: created_at.parse().expect("valid RFC 3339 timestamp"),
            valid_until: None,
            duration: 0,
            travelers: 2,
            itinerary: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
