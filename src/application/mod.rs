//! Application layer - Session state, Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change persisted state; query handlers only read it.

mod context;
pub mod handlers;
mod session_state;

pub use context::AppContext;
pub use handlers::{
    // Symptom
    LookupOutcome, LookupSymptomCommand, LookupSymptomHandler,
    // Technique
    ExplainTechniqueCommand, ExplainTechniqueHandler, ListTechniquesHandler, ListTechniquesQuery,
    // Journal
    AddJournalEntryCommand, AddJournalEntryHandler, DeleteJournalEntryCommand,
    DeleteJournalEntryHandler, ListJournalEntriesHandler,
    // Subscription & profile
    GetProfileHandler, ProfileView, StartSubscriptionHandler,
    // Preferences
    DisclaimerHandler, LocalePreferenceHandler,
};
pub use session_state::SessionState;
