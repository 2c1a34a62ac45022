//! LocalePreferenceHandler - reads and changes the persisted locale.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::localization::Locale;
use crate::ports::{keys, KeyValueStore};

/// Reads the active locale. Absent or unsupported values fall back to the default.
pub async fn current_locale(store: &dyn KeyValueStore) -> Result<Locale, DomainError> {
    let raw = store
        .get(keys::LOCALE)
        .await
        .map_err(|e| DomainError::storage(e.to_string()))?;

    match raw {
        None => Ok(Locale::default()),
        Some(code) => Ok(code.parse().unwrap_or_else(|err| {
            tracing::warn!(code = %code, error = %err, "Unsupported stored locale, using default");
            Locale::default()
        })),
    }
}

/// Handler for the locale preference.
pub struct LocalePreferenceHandler {
    store: Arc<dyn KeyValueStore>,
}

impl LocalePreferenceHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn current(&self) -> Result<Locale, DomainError> {
        current_locale(self.store.as_ref()).await
    }

    pub async fn set(&self, locale: Locale) -> Result<(), DomainError> {
        self.store
            .set(keys::LOCALE, locale.code())
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        tracing::info!(locale = %locale.code(), "Locale changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;

    #[tokio::test]
    async fn defaults_to_spanish() {
        let handler = LocalePreferenceHandler::new(Arc::new(InMemoryKeyValueStore::new()));
        assert_eq!(handler.current().await.unwrap(), Locale::Es);
    }

    #[tokio::test]
    async fn set_persists_code() {
        let store = InMemoryKeyValueStore::new();
        let handler = LocalePreferenceHandler::new(Arc::new(store.clone()));

        handler.set(Locale::Zh).await.unwrap();

        assert_eq!(handler.current().await.unwrap(), Locale::Zh);
        assert_eq!(store.get(keys::LOCALE).await.unwrap().as_deref(), Some("zh"));
    }

    #[tokio::test]
    async fn unsupported_stored_value_falls_back() {
        let store = InMemoryKeyValueStore::with_entries([(keys::LOCALE, "de")]);
        let handler = LocalePreferenceHandler::new(Arc::new(store));

        assert_eq!(handler.current().await.unwrap(), Locale::Es);
    }
}
