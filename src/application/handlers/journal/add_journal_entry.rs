//! AddJournalEntryHandler - Command handler for writing a journal entry.

use std::sync::Arc;

use super::{load_journal, save_journal};
use crate::application::handlers::preferences::current_locale;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::journal::JournalEntry;
use crate::ports::KeyValueStore;

/// Command to add a journal entry.
#[derive(Debug, Clone)]
pub struct AddJournalEntryCommand {
    pub content: String,
}

/// Handler for adding journal entries.
pub struct AddJournalEntryHandler {
    store: Arc<dyn KeyValueStore>,
}

impl AddJournalEntryHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AddJournalEntryCommand) -> Result<JournalEntry, DomainError> {
        self.handle_at(cmd, Timestamp::now()).await
    }

    /// Adds the entry as if written at `at`.
    pub async fn handle_at(
        &self,
        cmd: AddJournalEntryCommand,
        at: Timestamp,
    ) -> Result<JournalEntry, DomainError> {
        let locale = current_locale(self.store.as_ref()).await?;
        let entry = JournalEntry::write(cmd.content, locale, at)?;

        let mut journal = load_journal(self.store.as_ref()).await?;
        journal.prepend(entry.clone());
        save_journal(self.store.as_ref(), &journal).await?;

        tracing::info!(entry_id = %entry.id, entries = journal.len(), "Journal entry added");
        Ok(entry)
    }
}
