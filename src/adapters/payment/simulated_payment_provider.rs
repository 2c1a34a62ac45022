//! Simulated payment provider.
//!
//! Stands in for a checkout backend: waits a moment, then accepts every
//! request with a `sim_pref_<unix-millis>` preference id. A failing mode
//! exists for exercising the error path.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::Timestamp;
use crate::ports::{PaymentError, PaymentProvider, SubscriptionPreference};

pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Payment provider that never talks to a real gateway.
#[derive(Debug, Clone)]
pub struct SimulatedPaymentProvider {
    delay: Duration,
    failure: Option<String>,
}

impl Default for SimulatedPaymentProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

impl SimulatedPaymentProvider {
    /// Accepts every request after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// Rejects every request with an unavailable error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            delay: Duration::ZERO,
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl PaymentProvider for SimulatedPaymentProvider {
    async fn create_subscription_preference(&self) -> Result<SubscriptionPreference, PaymentError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if let Some(message) = &self.failure {
            return Err(PaymentError::unavailable(message.clone()));
        }

        let preference_id = format!("sim_pref_{}", Timestamp::now().as_unix_millis());
        tracing::debug!(preference_id = %preference_id, "Simulated preference created");
        Ok(SubscriptionPreference::accepted(preference_id))
    }
}
