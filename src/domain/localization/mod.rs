//! Localization module.
//!
//! The persisted locale preference. UI string tables live outside this crate.

mod locale;

pub use locale::Locale;
