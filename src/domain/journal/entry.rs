//! A single journal entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::localization::Locale;

/// One reflection written by the user.
///
/// `id` is the creation instant (RFC 3339, millisecond precision), `date` is
/// the human-readable creation date in the locale active at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: String,
    pub content: String,
}

impl JournalEntry {
    /// Creates an entry written at `at`.
    ///
    /// Content is kept exactly as typed; it only has to contain something
    /// other than whitespace.
    pub fn write(
        content: impl Into<String>,
        locale: Locale,
        at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }

        Ok(Self {
            id: at.to_rfc3339_millis(),
            date: locale.format_long_date(&at),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> Timestamp {
        Timestamp::from_unix_millis(1_792_152_000_042).unwrap()
    }

    #[test]
    fn entry_id_is_creation_instant() {
        let entry = JournalEntry::write("hello", Locale::En, at()).unwrap();
        assert_eq!(entry.id, "2026-10-16T12:00:00.042Z");
        assert_eq!(entry.date, "October 16, 2026");
    }

    #[test]
    fn content_is_not_trimmed() {
        let entry = JournalEntry::write("  line one\nline two  ", Locale::Es, at()).unwrap();
        assert_eq!(entry.content, "  line one\nline two  ");
    }

    #[test]
    fn whitespace_only_content_is_rejected() {
        let result = JournalEntry::write(" \n\t ", Locale::Es, at());
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn entry_uses_plain_field_names_on_the_wire() {
        let entry = JournalEntry::write("x", Locale::En, at()).unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "2026-10-16T12:00:00.042Z");
        assert_eq!(json["date"], "October 16, 2026");
        assert_eq!(json["content"], "x");
    }
}
