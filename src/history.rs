//! Append-only history log over the key-value store.
//!
//! The whole log lives in one slot as a JSON array, oldest first. Entries
//! are never rewritten or removed; callers wanting newest-first reverse the
//! result themselves.

use crate::config::HISTORY_KEY;
use crate::db::KeyValueStore;
use crate::error::AssistantError;
use crate::models::{HistoryEntry, HistoryEvent, HistoryKind};

/// Full log in chronological order. A missing slot is an empty log.
pub fn read_all<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<HistoryEntry>, AssistantError> {
    match store.get(HISTORY_KEY)? {
        Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
        _ => Ok(Vec::new()),
    }
}

/// Append one entry to the end of the log.
pub fn append<S: KeyValueStore + ?Sized>(
    store: &mut S,
    entry: &HistoryEntry,
) -> Result<(), AssistantError> {
    let mut entries = read_all(store)?;
    entries.push(entry.clone());
    store.set(HISTORY_KEY, &serde_json::to_string(&entries)?)?;
    tracing::debug!(kind = %entry.kind(), total = entries.len(), "history entry appended");
    Ok(())
}

/// Stamp `event` with the current time and append it.
pub fn record<S: KeyValueStore + ?Sized>(
    store: &mut S,
    event: HistoryEvent,
) -> Result<HistoryEntry, AssistantError> {
    let entry = HistoryEntry::now(event);
    append(store, &entry)?;
    Ok(entry)
}

/// Entries of one kind, chronological.
pub fn entries_of_kind<S: KeyValueStore + ?Sized>(
    store: &S,
    kind: HistoryKind,
) -> Result<Vec<HistoryEntry>, AssistantError> {
    Ok(read_all(store)?
        .into_iter()
        .filter(|e| e.kind() == kind)
        .collect())
}
