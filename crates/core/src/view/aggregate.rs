//! Summary statistics over a full record store.
//!
//! These functions take the store slice itself. A projected view is a
//! `Vec<&R>`, so passing a filtered subset by mistake does not type-check.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::inbox::InboxMessage;
use crate::priority::Priority;
use crate::quotation::{Quotation, QuotationStatus};

// ---------------------------------------------------------------------------
// Inbox
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InboxStats {
    pub total: usize,
    pub unread: usize,
    pub action_required: usize,
    pub urgent: usize,
    /// Distinct categories in first-seen order.
    pub categories: Vec<String>,
}

pub fn summarize_inbox(store: &[InboxMessage]) -> InboxStats {
    let mut stats = InboxStats {
        total: store.len(),
        ..Default::default()
    };
    let mut seen = HashSet::new();

    for message in store {
        if !message.is_read {
            stats.unread += 1;
        }
        if message.action_required {
            stats.action_required += 1;
        }
        if message.priority == Priority::Urgent {
            stats.urgent += 1;
        }
        if seen.insert(message.category.as_str()) {
            stats.categories.push(message.category.clone());
        }
    }
    stats
}

// ---------------------------------------------------------------------------
// Quotations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuotationStats {
    pub total: usize,
    pub draft: usize,
    /// Sent to the customer, awaiting a decision.
    pub pending: usize,
    /// Approved by the customer.
    pub confirmed: usize,
    pub rejected: usize,
    pub expired: usize,
    /// Sum of `total_value` across every quotation, regardless of currency.
    pub total_value: f64,
    pub value_by_currency: BTreeMap<String, f64>,
}

pub fn summarize_quotations(store: &[Quotation]) -> QuotationStats {
    let mut stats = QuotationStats {
        total: store.len(),
        ..Default::default()
    };

    for quote in store {
        match quote.status {
            QuotationStatus::Draft => stats.draft += 1,
            QuotationStatus::Sent => stats.pending += 1,
            QuotationStatus::Approved => stats.confirmed += 1,
            QuotationStatus::Rejected => stats.rejected += 1,
            QuotationStatus::Expired => stats.expired += 1,
        }
        stats.total_value += quote.total_value;
        *stats
            .value_by_currency
            .entry(quote.currency.clone())
            .or_insert(0.0) += quote.total_value;
    }
    stats
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
