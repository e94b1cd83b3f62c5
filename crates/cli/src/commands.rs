//! Command implementations.
//!
//! Each command takes already-loaded stores and returns a serialisable
//! report; `main.rs` handles loading, saving and printing.

use serde::Serialize;
use tourdesk_core::error::CoreError;
use tourdesk_core::inbox::{self, InboxKind, InboxMessage};
use tourdesk_core::priority;
use tourdesk_core::quotation::{self, ItineraryDay, Quotation, QuotationStatus};
use tourdesk_core::types::Timestamp;
use tourdesk_core::view::{self, FilterAnomaly, InboxStats, QuotationStats, RawFilterParams};

/// Length of the random suffix in generated quotation ids.
const GENERATED_ID_SUFFIX_LEN: usize = 8;

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// A projected list view together with whole-store statistics.
#[derive(Debug, Serialize)]
pub struct ViewReport<'a, R, S> {
    pub items: Vec<&'a R>,
    pub stats: S,
    /// Filter values that were ignored.
    pub anomalies: Vec<FilterAnomaly>,
}

pub type InboxReport<'a> = ViewReport<'a, InboxMessage, InboxStats>;
pub type QuotationReport<'a> = ViewReport<'a, Quotation, QuotationStats>;

// ---------------------------------------------------------------------------
// List views
// ---------------------------------------------------------------------------

/// Filter and sort the inbox.
///
/// With `triage` set, the sort parameters are ignored and matching messages
/// come back in attention-score order instead.
pub fn inbox_view<'a>(
    store: &'a [InboxMessage],
    raw: &RawFilterParams,
    triage: bool,
) -> InboxReport<'a> {
    let (params, anomalies) = raw.resolve::<InboxKind>();
    let items: Vec<&InboxMessage> = if triage {
        priority::triage(store)
            .into_iter()
            .filter(|message| view::matches(*message, &params))
            .collect()
    } else {
        view::project(store, &params)
    };

    ViewReport {
        items,
        stats: view::summarize_inbox(store),
        anomalies,
    }
}

/// Filter and sort the quotation table.
pub fn quotation_view<'a>(store: &'a [Quotation], raw: &RawFilterParams) -> QuotationReport<'a> {
    let (params, anomalies) = raw.resolve::<QuotationStatus>();
    ViewReport {
        items: view::project(store, &params),
        stats: view::summarize_quotations(store),
        anomalies,
    }
}

// ---------------------------------------------------------------------------
// Inbox actions
// ---------------------------------------------------------------------------

/// Which messages a read-state change applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadTarget {
    One(String),
    All,
}

/// Apply a read-state change. Returns the number of messages affected.
///
/// `All` only supports marking read; marking the whole inbox unread is
/// rejected.
pub fn set_read_state(
    store: &mut [InboxMessage],
    target: &ReadTarget,
    is_read: bool,
) -> Result<usize, CoreError> {
    match target {
        ReadTarget::One(id) => {
            inbox::mark_read(store, id, is_read)?;
            tracing::info!(id = %id, is_read, "Updated read state");
            Ok(1)
        }
        ReadTarget::All if is_read => {
            let changed = inbox::mark_all_read(store);
            tracing::info!(changed, "Marked all messages read");
            Ok(changed)
        }
        ReadTarget::All => Err(CoreError::Validation(
            "Marking every message unread is not supported".to_string(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Quotation actions
// ---------------------------------------------------------------------------

/// Generate an id of the form `Q-xxxxxxxx`.
pub fn generate_quotation_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("Q-{}", &uuid[..GENERATED_ID_SUFFIX_LEN])
}

/// Clone the quotation `source_id` into a new draft and append it to the
/// store. Returns the index of the new quotation.
pub fn clone_into_store(
    store: &mut Vec<Quotation>,
    source_id: &str,
    new_id: Option<String>,
    now: Timestamp,
) -> Result<usize, CoreError> {
    let source = find_quotation(store, source_id)?;
    let new_id = new_id.unwrap_or_else(generate_quotation_id);
    if store.iter().any(|q| q.id == new_id) {
        return Err(CoreError::Conflict(format!(
            "Quotation id '{new_id}' already exists"
        )));
    }

    let copy = quotation::clone_quotation(&store[source], new_id, now);
    tracing::info!(source = source_id, id = %copy.id, "Cloned quotation");
    store.push(copy);
    Ok(store.len() - 1)
}

/// An itinerary edit requested from the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryEdit {
    Add { title: String, location: String, at: Option<u32> },
    Remove { day: u32 },
    Move { from: u32, to: u32 },
    AddActivity { day: u32, activity: String },
}

/// Apply an itinerary edit to the quotation `quote_id` in place.
pub fn edit_itinerary(
    store: &mut [Quotation],
    quote_id: &str,
    edit: ItineraryEdit,
) -> Result<(), CoreError> {
    let index = find_quotation(store, quote_id)?;
    let quote = &mut store[index];

    match edit {
        ItineraryEdit::Add { title, location, at } => {
            let day = ItineraryDay::new(title, location);
            match at {
                Some(position) => quote.insert_day(position, day)?,
                None => {
                    quote.add_day(day);
                }
            }
        }
        ItineraryEdit::Remove { day } => {
            quote.remove_day(day)?;
        }
        ItineraryEdit::Move { from, to } => quote.move_day(from, to)?,
        ItineraryEdit::AddActivity { day, activity } => {
            quote.update_day(day, |d| d.activities.push(activity))?
        }
    }

    tracing::info!(id = quote_id, duration = quote.duration, "Edited itinerary");
    Ok(())
}

fn find_quotation(store: &[Quotation], id: &str) -> Result<usize, CoreError> {
    store
        .iter()
        .position(|q| q.id == id)
        .ok_or_else(|| CoreError::NotFound {
            entity: "quotation",
            id: id.to_string(),
        })
}
