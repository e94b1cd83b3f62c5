/// Record identifiers are opaque strings supplied by the record source
/// (e.g. `"MSG-001"`, `"Q-2024-001"`).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
