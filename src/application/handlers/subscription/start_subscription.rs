//! StartSubscriptionHandler - Command handler for the upgrade flow.

use std::sync::Arc;

use crate::application::SessionState;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{PaymentProvider, SubscriptionPreference};

pub const PAYMENT_FAILED_MESSAGE: &str = "The payment could not be started. Please try again.";

/// Handler for starting a subscription.
///
/// Asks the payment provider for a preference and, when it is accepted,
/// switches the session to premium. Any failure leaves the session as it was.
pub struct StartSubscriptionHandler {
    session: Arc<SessionState>,
    payment_provider: Arc<dyn PaymentProvider>,
}

impl StartSubscriptionHandler {
    pub fn new(session: Arc<SessionState>, payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self {
            session,
            payment_provider,
        }
    }

    pub async fn handle(&self) -> Result<SubscriptionPreference, DomainError> {
        tracing::info!("Starting subscription");

        let preference = self
            .payment_provider
            .create_subscription_preference()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Payment preference request failed");
                DomainError::new(ErrorCode::PaymentFailed, PAYMENT_FAILED_MESSAGE)
            })?;

        if !preference.success {
            tracing::error!(
                preference_id = %preference.preference_id,
                "Payment provider declined the preference"
            );
            return Err(DomainError::new(ErrorCode::PaymentFailed, PAYMENT_FAILED_MESSAGE)
                .with_detail("preference_id", preference.preference_id));
        }

        self.session.subscribe().await?;
        Ok(preference)
    }
}
