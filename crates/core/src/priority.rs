//! Message priority levels and attention scoring for the operations inbox.
//!
//! [`Priority`] is totally ordered (`Low < Normal < High < Urgent`).
//! [`attention_score`] folds priority, unread state and the action-required
//! flag into a single number used by [`triage`] to surface what an operator
//! should look at first.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::inbox::InboxMessage;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_NORMAL: &str = "normal";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_URGENT: &str = "urgent";

/// All valid priority strings, lowest first.
pub const VALID_PRIORITIES: &[&str] =
    &[PRIORITY_LOW, PRIORITY_NORMAL, PRIORITY_HIGH, PRIORITY_URGENT];

/// Score contribution of an urgent message.
pub const WEIGHT_URGENT: u32 = 40;

/// Score contribution of a high-priority message.
pub const WEIGHT_HIGH: u32 = 30;

/// Score contribution of a normal-priority message.
pub const WEIGHT_NORMAL: u32 = 20;

/// Score contribution of a low-priority message.
pub const WEIGHT_LOW: u32 = 10;

/// Bonus for messages flagged as requiring operator action.
pub const ACTION_REQUIRED_BONUS: u32 = 15;

/// Bonus for messages nobody has opened yet.
pub const UNREAD_BONUS: u32 = 10;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Display emphasis of an inbox message.
///
/// Variant order is significant: the derived `Ord` makes `Urgent` the
/// greatest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => PRIORITY_LOW,
            Self::Normal => PRIORITY_NORMAL,
            Self::High => PRIORITY_HIGH,
            Self::Urgent => PRIORITY_URGENT,
        }
    }

    /// Numeric rank, `0` for low up to `3` for urgent.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Normal => 1,
            Self::High => 2,
            Self::Urgent => 3,
        }
    }

    /// Case-insensitive parse. Returns `None` for anything unrecognised.
    pub fn parse_loose(s: &str) -> Option<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            PRIORITY_LOW => Some(Self::Low),
            PRIORITY_NORMAL => Some(Self::Normal),
            PRIORITY_HIGH => Some(Self::High),
            PRIORITY_URGENT => Some(Self::Urgent),
            _ => None,
        }
    }

    /// Strict parse used when validating stored values.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            PRIORITY_LOW => Ok(Self::Low),
            PRIORITY_NORMAL => Ok(Self::Normal),
            PRIORITY_HIGH => Ok(Self::High),
            PRIORITY_URGENT => Ok(Self::Urgent),
            _ => Err(CoreError::Validation(format!(
                "Invalid priority '{s}'. Must be one of: {}",
                VALID_PRIORITIES.join(", ")
            ))),
        }
    }

    fn weight(&self) -> u32 {
        match self {
            Self::Low => WEIGHT_LOW,
            Self::Normal => WEIGHT_NORMAL,
            Self::High => WEIGHT_HIGH,
            Self::Urgent => WEIGHT_URGENT,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Attention score of a single message.
///
/// `priority weight + ACTION_REQUIRED_BONUS (if flagged) + UNREAD_BONUS (if unread)`.
pub fn attention_score(message: &InboxMessage) -> u32 {
    let mut score = message.priority.weight();
    if message.action_required {
        score += ACTION_REQUIRED_BONUS;
    }
    if !message.is_read {
        score += UNREAD_BONUS;
    }
    score
}

/// Order the whole store for triage: highest attention score first, newest
/// first among equal scores. Messages with equal score and timestamp keep
/// their store order.
pub fn triage(store: &[InboxMessage]) -> Vec<&InboxMessage> {
    let mut ordered: Vec<&InboxMessage> = store.iter().collect();
    ordered.sort_by(|a, b| {
        attention_score(b)
            .cmp(&attention_score(a))
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    ordered
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
