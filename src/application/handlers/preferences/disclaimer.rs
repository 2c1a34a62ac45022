//! DisclaimerHandler - first-run disclaimer flag.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{keys, KeyValueStore};

/// Handler for the first-run disclaimer.
pub struct DisclaimerHandler {
    store: Arc<dyn KeyValueStore>,
}

impl DisclaimerHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// True until the user has accepted the disclaimer once.
    pub async fn needs_disclaimer(&self) -> Result<bool, DomainError> {
        let shown = self
            .store
            .contains(keys::DISCLAIMER_SHOWN)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        Ok(!shown)
    }

    pub async fn accept(&self) -> Result<(), DomainError> {
        self.store
            .set(keys::DISCLAIMER_SHOWN, "true")
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        tracing::debug!("Disclaimer accepted");
        Ok(())
    }
}
