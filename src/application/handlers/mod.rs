//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod journal;
pub mod preferences;
pub mod subscription;
pub mod symptom;
pub mod technique;

pub use journal::{
    AddJournalEntryCommand, AddJournalEntryHandler, DeleteJournalEntryCommand,
    DeleteJournalEntryHandler, ListJournalEntriesHandler,
};
pub use preferences::{current_locale, DisclaimerHandler, LocalePreferenceHandler};
pub use subscription::{
    GetProfileHandler, ProfileView, StartSubscriptionHandler, PAYMENT_FAILED_MESSAGE,
};
pub use symptom::{
    LookupOutcome, LookupSymptomCommand, LookupSymptomHandler, LOOKUP_FAILED_MESSAGE,
};
pub use technique::{
    ExplainTechniqueCommand, ExplainTechniqueHandler, ListTechniquesHandler, ListTechniquesQuery,
    EXPLANATION_FAILED_MESSAGE,
};
