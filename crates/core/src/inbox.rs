//! Operations inbox records and read-state actions.
//!
//! Messages relate to quotes, bookings and suppliers. The store is a plain
//! `Vec<InboxMessage>` owned by the caller; the only mutations offered here
//! are the mark-read / mark-unread actions, and they touch `is_read` alone.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::priority::Priority;
use crate::types::{RecordId, Timestamp};
use crate::view::{FilterValue, ViewRecord};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const KIND_QUOTE_REQUEST: &str = "quote_request";
pub const KIND_SUPPLIER_UPDATE: &str = "supplier_update";
pub const KIND_CLIENT_MESSAGE: &str = "client_message";
pub const KIND_TASK_ALERT: &str = "task_alert";
pub const KIND_SYSTEM_NOTIFICATION: &str = "system_notification";
pub const KIND_TRIP_UPDATE: &str = "trip_update";
pub const KIND_OTHER: &str = "other";

/// All valid message kinds.
pub const VALID_KINDS: &[&str] = &[
    KIND_QUOTE_REQUEST,
    KIND_SUPPLIER_UPDATE,
    KIND_CLIENT_MESSAGE,
    KIND_TASK_ALERT,
    KIND_SYSTEM_NOTIFICATION,
    KIND_TRIP_UPDATE,
    KIND_OTHER,
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// What a message is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InboxKind {
    QuoteRequest,
    SupplierUpdate,
    ClientMessage,
    TaskAlert,
    SystemNotification,
    TripUpdate,
    Other,
}

impl InboxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuoteRequest => KIND_QUOTE_REQUEST,
            Self::SupplierUpdate => KIND_SUPPLIER_UPDATE,
            Self::ClientMessage => KIND_CLIENT_MESSAGE,
            Self::TaskAlert => KIND_TASK_ALERT,
            Self::SystemNotification => KIND_SYSTEM_NOTIFICATION,
            Self::TripUpdate => KIND_TRIP_UPDATE,
            Self::Other => KIND_OTHER,
        }
    }

    /// Parse a kind from its stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            KIND_QUOTE_REQUEST => Ok(Self::QuoteRequest),
            KIND_SUPPLIER_UPDATE => Ok(Self::SupplierUpdate),
            KIND_CLIENT_MESSAGE => Ok(Self::ClientMessage),
            KIND_TASK_ALERT => Ok(Self::TaskAlert),
            KIND_SYSTEM_NOTIFICATION => Ok(Self::SystemNotification),
            KIND_TRIP_UPDATE => Ok(Self::TripUpdate),
            KIND_OTHER => Ok(Self::Other),
            _ => Err(CoreError::Validation(format!(
                "Invalid message kind '{s}'. Must be one of: {}",
                VALID_KINDS.join(", ")
            ))),
        }
    }
}

impl FilterValue for InboxKind {
    const DIMENSION: &'static str = "kind";

    fn parse_filter(s: &str) -> Option<Self> {
        Self::from_str_value(s).ok()
    }
}

/// Who sent a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// One entry of a conversation thread attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMessage {
    pub id: RecordId,
    pub author: String,
    pub body: String,
    pub sent_at: Timestamp,
}

/// A single inbox entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxMessage {
    pub id: RecordId,
    pub kind: InboxKind,
    pub title: String,
    pub preview: String,
    pub is_read: bool,
    pub priority: Priority,
    pub created_at: Timestamp,
    pub sender: Sender,
    pub action_required: bool,
    pub category: String,
    /// Quote or booking reference this message concerns, if any.
    #[serde(default)]
    pub related_ref: Option<String>,
    #[serde(default)]
    pub thread: Option<Vec<ThreadMessage>>,
}

impl ViewRecord for InboxMessage {
    type Category = InboxKind;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.preview.as_str(),
            self.sender.name.as_str(),
        ]
    }

    fn category(&self) -> InboxKind {
        self.kind
    }

    fn priority(&self) -> Option<Priority> {
        Some(self.priority)
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn sort_name(&self) -> &str {
        &self.sender.name
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject a store whose ids are not unique.
pub fn validate_inbox(store: &[InboxMessage]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(store.len());
    for message in store {
        if !seen.insert(message.id.as_str()) {
            return Err(CoreError::Conflict(format!(
                "Duplicate inbox message id '{}'",
                message.id
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read-state actions
// ---------------------------------------------------------------------------

/// Set the read flag of the message with the given id.
pub fn mark_read(store: &mut [InboxMessage], id: &str, is_read: bool) -> Result<(), CoreError> {
    let message = store
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| CoreError::NotFound {
            entity: "inbox_message",
            id: id.to_string(),
        })?;
    message.is_read = is_read;
    Ok(())
}

/// Mark every message read. Returns how many messages changed state.
pub fn mark_all_read(store: &mut [InboxMessage]) -> usize {
    let mut changed = 0;
    for message in store.iter_mut().filter(|m| !m.is_read) {
        message.is_read = true;
        changed += 1;
    }
    changed
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
