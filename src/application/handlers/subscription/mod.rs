//! Subscription and profile handlers.

mod get_profile;
mod start_subscription;

pub use get_profile::{GetProfileHandler, ProfileView};
pub use start_subscription::{StartSubscriptionHandler, PAYMENT_FAILED_MESSAGE};
