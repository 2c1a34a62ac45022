//! Local user profile.

use serde::{Deserialize, Serialize};

/// Read-only profile shown next to the subscription state.
///
/// There is no account system; the profile is a fixed placeholder and is
/// not derived from persisted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// The profile every local user sees.
    pub fn placeholder() -> Self {
        Self::new("Alex Ríos", "alex.rios@email.com")
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::placeholder()
    }
}
