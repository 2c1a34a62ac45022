//! Preference handlers: locale and first-run disclaimer.

mod disclaimer;
mod locale_preference;

pub use disclaimer::DisclaimerHandler;
pub use locale_preference::{current_locale, LocalePreferenceHandler};
