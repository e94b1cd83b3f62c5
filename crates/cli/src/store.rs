//! Loading and saving record stores.
//!
//! A store is either a JSON array on disk or the bundled demo data. Stores
//! are validated once on load; the view pipeline assumes valid records.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tourdesk_core::demo;
use tourdesk_core::inbox::{validate_inbox, InboxMessage};
use tourdesk_core::quotation::{validate_quotations, Quotation};

/// Load the inbox from `path`, or the bundled demo inbox when `None`.
pub fn load_inbox(path: Option<&Path>) -> anyhow::Result<Vec<InboxMessage>> {
    let store = match path {
        Some(path) => read_json::<InboxMessage>(path)?,
        None => demo::inbox_messages()?,
    };
    validate_inbox(&store)?;
    tracing::debug!(count = store.len(), "Loaded inbox store");
    Ok(store)
}

/// Load quotations from `path`, or the bundled demo quotations when `None`.
pub fn load_quotations(path: Option<&Path>) -> anyhow::Result<Vec<Quotation>> {
    let store = match path {
        Some(path) => read_json::<Quotation>(path)?,
        None => demo::quotations()?,
    };
    validate_quotations(&store)?;
    tracing::debug!(count = store.len(), "Loaded quotation store");
    Ok(store)
}

/// Write a store back as pretty-printed JSON, creating parent directories.
pub fn save_json<T: Serialize>(path: &Path, records: &[T]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(records).context("Failed to serialize store")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), count = records.len(), "Saved store");
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON store {}", path.display()))
}
