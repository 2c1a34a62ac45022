//! Symptom decoding domain module.
//!
//! - `data` - SymptomData record parsed from the model's JSON answer
//! - `prompt` - Prompt text and response schema sent to the model

mod data;
mod prompt;

pub use data::{SymptomData, TechnicalInfo};
pub use prompt::{symptom_prompt, SYMPTOM_RESPONSE_SCHEMA, SYMPTOM_TEMPERATURE};
