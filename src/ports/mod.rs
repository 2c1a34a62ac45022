//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Local persisted key space
//! - `AIProvider` - Generative-text service
//! - `PaymentProvider` - Subscription preference creation

mod ai_provider;
mod key_value_store;
mod payment_provider;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    ResponseFormat,
};
pub use key_value_store::{keys, KeyValueStore, StoreError};
pub use payment_provider::{PaymentError, PaymentProvider, SubscriptionPreference};
