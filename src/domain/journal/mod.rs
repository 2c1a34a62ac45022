//! Journal domain module.
//!
//! Free-form reflections stored locally, newest first.

mod entry;
#[allow(clippy::module_inception)]
mod journal;

pub use entry::JournalEntry;
pub use journal::Journal;
