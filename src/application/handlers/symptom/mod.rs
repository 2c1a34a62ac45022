//! Symptom handlers.

mod lookup_symptom;

pub use lookup_symptom::{
    LookupOutcome, LookupSymptomCommand, LookupSymptomHandler, LOOKUP_FAILED_MESSAGE,
};
