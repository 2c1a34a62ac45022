//! ListJournalEntriesHandler - Query handler for the journal.

use std::sync::Arc;

use super::load_journal;
use crate::domain::foundation::DomainError;
use crate::domain::journal::JournalEntry;
use crate::ports::KeyValueStore;

/// Handler for listing journal entries, newest first.
pub struct ListJournalEntriesHandler {
    store: Arc<dyn KeyValueStore>,
}

impl ListJournalEntriesHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<JournalEntry>, DomainError> {
        Ok(load_journal(self.store.as_ref()).await?.into_entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::keys;

    #[tokio::test]
    async fn absent_key_is_empty() {
        let handler = ListJournalEntriesHandler::new(Arc::new(InMemoryKeyValueStore::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn returns_stored_order() {
        let json = r#"[
            {"id":"2026-10-16T12:01:00.000Z","date":"16 de octubre de 2026","content":"b"},
            {"id":"2026-10-16T12:00:00.000Z","date":"16 de octubre de 2026","content":"a"}
        ]"#;
        let store = InMemoryKeyValueStore::with_entries([(keys::JOURNAL_ENTRIES, json)]);
        let handler = ListJournalEntriesHandler::new(Arc::new(store));

        let entries = handler.handle().await.unwrap();

        let contents: Vec<_> = entries.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn malformed_json_is_storage_error() {
        let store = InMemoryKeyValueStore::with_entries([(keys::JOURNAL_ENTRIES, "not json")]);
        let handler = ListJournalEntriesHandler::new(Arc::new(store));

        let err = handler.handle().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
