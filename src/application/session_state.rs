//! SessionState - the entitlement state manager.
//!
//! Owns the in-memory copy of the subscription flag and free-search counter,
//! keeps them in sync with the key-value store, and answers the search gate.
//! Constructed once per process and shared by `Arc`.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entitlement::{
    EntitlementTier, SubscriptionState, UserProfile, FREE_SEARCH_LIMIT, SUBSCRIBED_FLAG,
};
use crate::domain::foundation::DomainError;
use crate::ports::{keys, KeyValueStore};

/// Entitlement and session state backed by a key-value store.
pub struct SessionState {
    store: Arc<dyn KeyValueStore>,
    state: RwLock<SubscriptionState>,
    profile: UserProfile,
}

impl SessionState {
    /// Reads the persisted flag and counter. Missing values mean a fresh install.
    pub async fn initialize(store: Arc<dyn KeyValueStore>) -> Result<Self, DomainError> {
        let state = Self::load(store.as_ref()).await?;
        tracing::debug!(
            is_subscribed = state.is_subscribed,
            search_count = state.search_count,
            "Session state initialized"
        );

        Ok(Self {
            store,
            state: RwLock::new(state),
            profile: UserProfile::placeholder(),
        })
    }

    async fn load(store: &dyn KeyValueStore) -> Result<SubscriptionState, DomainError> {
        let flag = store
            .get(keys::SUBSCRIPTION_STATUS)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        let count = store
            .get(keys::SEARCH_COUNT)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        let (state, problem) = SubscriptionState::from_persisted(flag.as_deref(), count.as_deref());
        if let Some(problem) = problem {
            tracing::warn!(
                error = %problem,
                search_count = state.search_count,
                "Search counter is malformed"
            );
        }
        Ok(state)
    }

    /// Whether a gated search may run right now.
    pub async fn is_allowed_to_search(&self) -> bool {
        self.state.read().await.is_allowed_to_search()
    }

    /// Counts one successful gated search. No-op while subscribed.
    ///
    /// The in-memory value only changes once the store accepted the write.
    pub async fn increment_search_count(&self) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let mut next = *state;
        if !next.record_search() {
            return Ok(());
        }

        self.store
            .set(keys::SEARCH_COUNT, &next.search_count.to_string())
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        *state = next;
        tracing::debug!(search_count = next.search_count, "Search counted");
        Ok(())
    }

    /// Switches to premium. Calling it again changes nothing.
    pub async fn subscribe(&self) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let mut next = *state;
        if !next.subscribe() {
            return Ok(());
        }

        self.store
            .set(keys::SUBSCRIPTION_STATUS, SUBSCRIBED_FLAG)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        *state = next;
        tracing::info!(search_count = next.search_count, "Subscription activated");
        Ok(())
    }

    /// Erases every key the application persists and starts over as a
    /// fresh install.
    ///
    /// Every key is attempted even if an earlier removal fails, and the
    /// in-memory state is reset either way. The first failure is returned.
    pub async fn logout(&self) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        let mut first_error = None;
        for key in keys::ALL {
            if let Err(e) = self.store.remove(key).await {
                tracing::error!(key = %key, error = %e, "Failed to erase key");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        *state = SubscriptionState::new();

        match first_error {
            Some(e) => Err(DomainError::storage(e.to_string())),
            None => {
                tracing::info!("Local data erased");
                Ok(())
            }
        }
    }

    pub async fn snapshot(&self) -> SubscriptionState {
        *self.state.read().await
    }

    pub async fn tier(&self) -> EntitlementTier {
        self.state.read().await.tier()
    }

    pub fn user_profile(&self) -> UserProfile {
        self.profile.clone()
    }

    pub fn free_search_limit(&self) -> u32 {
        FREE_SEARCH_LIMIT
    }
}
