//! Journal handlers.
//!
//! The journal lives under a single key as a JSON array, newest first.
//! Every change rewrites the whole list.

mod add_journal_entry;
mod delete_journal_entry;
mod list_journal_entries;

pub use add_journal_entry::{AddJournalEntryCommand, AddJournalEntryHandler};
pub use delete_journal_entry::{DeleteJournalEntryCommand, DeleteJournalEntryHandler};
pub use list_journal_entries::ListJournalEntriesHandler;

use crate::domain::foundation::DomainError;
use crate::domain::journal::Journal;
use crate::ports::{keys, KeyValueStore};

/// Loads the journal. Absent key is an empty journal; malformed JSON is an error.
async fn load_journal(store: &dyn KeyValueStore) -> Result<Journal, DomainError> {
    let raw = store
        .get(keys::JOURNAL_ENTRIES)
        .await
        .map_err(|e| DomainError::storage(e.to_string()))?;

    match raw {
        None => Ok(Journal::new()),
        Some(json) => Journal::from_json(&json).map_err(|e| {
            tracing::error!(error = %e, "Stored journal is not valid JSON");
            DomainError::storage(format!("Stored journal is unreadable: {}", e))
        }),
    }
}

async fn save_journal(store: &dyn KeyValueStore, journal: &Journal) -> Result<(), DomainError> {
    let json = journal
        .to_json()
        .map_err(|e| DomainError::storage(format!("Failed to encode journal: {}", e)))?;

    store
        .set(keys::JOURNAL_ENTRIES, &json)
        .await
        .map_err(|e| DomainError::storage(e.to_string()))
}
