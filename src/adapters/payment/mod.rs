//! Payment adapters.
//!
//! - `SimulatedPaymentProvider` - Accepts after a delay; no real gateway

mod simulated_payment_provider;

pub use simulated_payment_provider::{SimulatedPaymentProvider, DEFAULT_SIMULATED_DELAY};
