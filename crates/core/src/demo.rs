//! Bundled demo data.
//!
//! The back office ships with a fixed set of inbox messages and quotations
//! so screens (and the CLI) have something to show without a data source.

use crate::error::CoreError;
use crate::inbox::{validate_inbox, InboxMessage};
use crate::quotation::{validate_quotations, Quotation};

const INBOX_JSON: &str = include_str!("../data/inbox.json");
const QUOTATIONS_JSON: &str = include_str!("../data/quotations.json");

/// Parse and validate the bundled inbox.
pub fn inbox_messages() -> Result<Vec<InboxMessage>, CoreError> {
    let store: Vec<InboxMessage> = serde_json::from_str(INBOX_JSON)
        .map_err(|e| CoreError::Internal(format!("Bundled inbox data is invalid: {e}")))?;
    validate_inbox(&store)?;
    Ok(store)
}

/// Parse and validate the bundled quotations.
pub fn quotations() -> Result<Vec<Quotation>, CoreError> {
    let store: Vec<Quotation> = serde_json::from_str(QUOTATIONS_JSON)
        .map_err(|e| CoreError::Internal(format!("Bundled quotation data is invalid: {e}")))?;
    validate_quotations(&store)?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{summarize_inbox, summarize_quotations};

    #[test]
    fn bundled_inbox_loads() {
        let store = inbox_messages().unwrap();
        assert_eq!(store.len(), 8);
        let stats = summarize_inbox(&store);
        assert_eq!(stats.unread, 4);
        assert_eq!(stats.urgent, 1);
        assert_eq!(stats.action_required, 4);
    }

    #[test]
    fn bundled_quotations_load() {
        let store = quotations().unwrap();
        assert_eq!(store.len(), 6);
        let stats = summarize_quotations(&store);
        assert_eq!(stats.confirmed, 2);
        assert_eq!(stats.value_by_currency["USD"], 18400.0);
    }

    #[test]
    fn bundled_itinerary_is_contiguous() {
        let store = quotations().unwrap();
        let honeymoon = store.iter().find(|q| q.id == "Q-2024-014").unwrap();
        let numbers: Vec<u32> = honeymoon.itinerary.iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(honeymoon.duration, 3);
    }
}
