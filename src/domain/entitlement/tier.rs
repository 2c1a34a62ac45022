//! Entitlement tier definitions.
//!
//! Derived view of [`SubscriptionState`](super::SubscriptionState) used for
//! display and logging.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entitlement tier of the local user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "lowercase")]
pub enum EntitlementTier {
    /// Free tier - metered symptom searches.
    Free {
        /// Gated searches already performed.
        search_count: u32,
    },

    /// Premium tier - unmetered searches.
    Premium,
}

impl EntitlementTier {
    /// Returns true if this tier is a paid tier.
    pub fn is_paid(&self) -> bool {
        matches!(self, EntitlementTier::Premium)
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            EntitlementTier::Free { .. } => "Free",
            EntitlementTier::Premium => "Premium",
        }
    }
}

impl fmt::Display for EntitlementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_tier_is_not_paid() {
        assert!(!EntitlementTier::Free { search_count: 0 }.is_paid());
    }

    #[test]
    fn premium_tier_is_paid() {
        assert!(EntitlementTier::Premium.is_paid());
    }

    #[test]
    fn display_names_are_correct() {
        assert_eq!(EntitlementTier::Free { search_count: 2 }.to_string(), "Free");
        assert_eq!(EntitlementTier::Premium.to_string(), "Premium");
    }

    #[test]
    fn tier_serializes_with_tag() {
        let json = serde_json::to_string(&EntitlementTier::Free { search_count: 1 }).unwrap();
        assert_eq!(json, r#"{"tier":"free","search_count":1}"#);

        let json = serde_json::to_string(&EntitlementTier::Premium).unwrap();
        assert_eq!(json, r#"{"tier":"premium"}"#);
    }
}
