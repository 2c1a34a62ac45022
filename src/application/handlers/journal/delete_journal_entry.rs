//! DeleteJournalEntryHandler - Command handler for removing a journal entry.

use std::sync::Arc;

use super::{load_journal, save_journal};
use crate::domain::foundation::DomainError;
use crate::ports::KeyValueStore;

/// Command to delete a journal entry by id.
#[derive(Debug, Clone)]
pub struct DeleteJournalEntryCommand {
    pub entry_id: String,
}

/// Handler for deleting journal entries.
pub struct DeleteJournalEntryHandler {
    store: Arc<dyn KeyValueStore>,
}

impl DeleteJournalEntryHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns whether an entry was removed. Unknown ids are a no-op.
    pub async fn handle(&self, cmd: DeleteJournalEntryCommand) -> Result<bool, DomainError> {
        let mut journal = load_journal(self.store.as_ref()).await?;

        if !journal.remove(&cmd.entry_id) {
            tracing::debug!(entry_id = %cmd.entry_id, "No journal entry to delete");
            return Ok(false);
        }

        save_journal(self.store.as_ref(), &journal).await?;
        tracing::info!(entry_id = %cmd.entry_id, entries = journal.len(), "Journal entry deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::journal::{Journal, JournalEntry};
    use crate::domain::localization::Locale;
    use crate::ports::keys;

    fn seeded_store() -> InMemoryKeyValueStore {
        let mut journal = Journal::new();
        for millis in [1_792_152_000_000, 1_792_152_060_000] {
            let at = Timestamp::from_unix_millis(millis).unwrap();
            journal.prepend(JournalEntry::write("entry", Locale::Es, at).unwrap());
        }
        InMemoryKeyValueStore::with_entries([(keys::JOURNAL_ENTRIES, journal.to_json().unwrap())])
    }

    fn cmd(id: &str) -> DeleteJournalEntryCommand {
        DeleteJournalEntryCommand {
            entry_id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn removes_matching_entry() {
        let store = seeded_store();
        let handler = DeleteJournalEntryHandler::new(Arc::new(store.clone()));

        let removed = handler.handle(cmd("2026-10-16T12:00:00.000Z")).await.unwrap();

        assert!(removed);
        let raw = store.get(keys::JOURNAL_ENTRIES).await.unwrap().unwrap();
        let journal = Journal::from_json(&raw).unwrap();
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries()[0].id, "2026-10-16T12:01:00.000Z");
    }

    #[tokio::test]
    async fn unknown_id_is_noop() {
        let store = seeded_store();
        let before = store.get(keys::JOURNAL_ENTRIES).await.unwrap();
        let handler = DeleteJournalEntryHandler::new(Arc::new(store.clone()));

        assert!(!handler.handle(cmd("nope")).await.unwrap());
        assert_eq!(store.get(keys::JOURNAL_ENTRIES).await.unwrap(), before);
    }

    #[tokio::test]
    async fn empty_store_is_noop() {
        let handler = DeleteJournalEntryHandler::new(Arc::new(InMemoryKeyValueStore::new()));
        assert!(!handler.handle(cmd("x")).await.unwrap());
    }
}
