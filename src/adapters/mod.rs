//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - Generative-text providers (Gemini, mock)
//! - `payment` - Payment providers (simulated)
//! - `storage` - Key-value stores (YAML file, in-memory)

pub mod ai;
pub mod payment;
pub mod storage;
