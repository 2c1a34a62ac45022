//! Payment provider port.
//!
//! Starting a subscription asks the payment collaborator for a checkout
//! "preference". Only a simulated collaborator exists today; a real gateway
//! would create the preference on a backend and hand back its id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a subscription preference. Takes no parameters: the plan is fixed.
    async fn create_subscription_preference(&self) -> Result<SubscriptionPreference, PaymentError>;
}

/// Result of initiating a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPreference {
    /// Whether the provider accepted the request.
    pub success: bool,
    /// Provider's preference id.
    pub preference_id: String,
}

impl SubscriptionPreference {
    pub fn accepted(preference_id: impl Into<String>) -> Self {
        Self {
            success: true,
            preference_id: preference_id.into(),
        }
    }

    pub fn declined(preference_id: impl Into<String>) -> Self {
        Self {
            success: false,
            preference_id: preference_id.into(),
        }
    }
}

/// Payment provider errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentError {
    /// Provider could not be reached.
    #[error("payment provider unavailable: {0}")]
    Unavailable(String),

    /// Provider answered with something unusable.
    #[error("invalid payment provider response: {0}")]
    InvalidResponse(String),
}

impl PaymentError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
