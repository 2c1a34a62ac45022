//! Subscription state and the free-search gate.
//!
//! The gate is a pure function of two persisted values: the subscription
//! flag and the number of gated searches performed while on the free tier.

use serde::{Deserialize, Serialize};

use super::EntitlementTier;
use crate::domain::foundation::ValidationError;

/// Number of gated searches permitted before a subscription is required.
pub const FREE_SEARCH_LIMIT: u32 = 1;

/// Value persisted for an active subscription. Anything else reads as free.
pub const SUBSCRIBED_FLAG: &str = "true";

/// Durable entitlement state of the local user.
///
/// # Invariants
///
/// - `search_count` only grows while `is_subscribed` is false
/// - `is_subscribed` never goes back to false except through a full reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscriptionState {
    pub is_subscribed: bool,
    pub search_count: u32,
}

impl SubscriptionState {
    /// Fresh-install state: free tier, no searches used.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds state from the raw persisted values.
    ///
    /// Absent or empty values fall back to defaults. A malformed counter is
    /// reported so the caller can log it, and is read through its leading
    /// digits. With no digits at all the free quota counts as used up.
    pub fn from_persisted(
        subscription_flag: Option<&str>,
        search_count: Option<&str>,
    ) -> (Self, Option<ValidationError>) {
        let is_subscribed = subscription_flag == Some(SUBSCRIBED_FLAG);
        let (search_count, problem) = match search_count {
            None | Some("") => (0, None),
            Some(raw) => match parse_search_count(raw) {
                Ok(count) => (count, None),
                Err(err) => (leading_count(raw).unwrap_or(FREE_SEARCH_LIMIT), Some(err)),
            },
        };

        (
            Self {
                is_subscribed,
                search_count,
            },
            problem,
        )
    }

    /// Whether a gated search may run right now.
    pub fn is_allowed_to_search(&self) -> bool {
        self.is_subscribed || self.search_count < FREE_SEARCH_LIMIT
    }

    /// Records one successful gated search.
    ///
    /// Premium users are not metered. The counter is not clamped at the
    /// limit; the gate stays closed for every value at or above it.
    /// Returns true if the counter changed.
    pub fn record_search(&mut self) -> bool {
        if self.is_subscribed {
            return false;
        }
        self.search_count = self.search_count.saturating_add(1);
        true
    }

    /// Upgrades to premium. Returns true if this was a transition.
    pub fn subscribe(&mut self) -> bool {
        let changed = !self.is_subscribed;
        self.is_subscribed = true;
        changed
    }

    /// Searches left on the free tier. `None` when premium.
    pub fn remaining_free_searches(&self) -> Option<u32> {
        if self.is_subscribed {
            None
        } else {
            Some(FREE_SEARCH_LIMIT.saturating_sub(self.search_count))
        }
    }

    /// Returns the tier view of this state.
    pub fn tier(&self) -> EntitlementTier {
        if self.is_subscribed {
            EntitlementTier::Premium
        } else {
            EntitlementTier::Free {
                search_count: self.search_count,
            }
        }
    }
}

/// Parses a persisted decimal search counter.
pub fn parse_search_count(raw: &str) -> Result<u32, ValidationError> {
    raw.trim().parse::<u32>().map_err(|e| {
        ValidationError::invalid_format("search_count", format!("'{}': {}", raw, e))
    })
}

/// Reads the counter from its leading digits, ignoring whatever follows.
///
/// Negative values read as zero and values past `u32::MAX` saturate.
/// Returns `None` when the value does not start with a number.
fn leading_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(rest[..len].parse::<u32>().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Gate Tests

    #[test]
    fn fresh_state_is_allowed() {
        assert!(SubscriptionState::new().is_allowed_to_search());
    }

    #[test]
    fn one_search_closes_the_gate() {
        let mut state = SubscriptionState::new();
        assert!(state.record_search());
        assert_eq!(state.search_count, 1);
        assert!(!state.is_allowed_to_search());
    }

    #[test]
    fn counter_is_not_clamped_at_limit() {
        let mut state = SubscriptionState::new();
        state.record_search();
        state.record_search();
        assert_eq!(state.search_count, 2);
        assert!(!state.is_allowed_to_search());
    }

    #[test]
    fn premium_searches_are_not_metered() {
        let mut state = SubscriptionState::new();
        state.subscribe();
        for _ in 0..5 {
            assert!(!state.record_search());
        }
        assert_eq!(state.search_count, 0);
        assert!(state.is_allowed_to_search());
    }

    #[test]
    fn subscribe_is_idempotent_and_keeps_count() {
        let mut state = SubscriptionState {
            is_subscribed: false,
            search_count: 3,
        };
        assert!(state.subscribe());
        assert!(!state.subscribe());
        assert!(state.is_subscribed);
        assert_eq!(state.search_count, 3);
    }

    #[test]
    fn remaining_free_searches_reports_quota() {
        let mut state = SubscriptionState::new();
        assert_eq!(state.remaining_free_searches(), Some(1));
        state.record_search();
        state.record_search();
        assert_eq!(state.remaining_free_searches(), Some(0));
        state.subscribe();
        assert_eq!(state.remaining_free_searches(), None);
    }

    // Persistence Decoding Tests

    #[test]
    fn absent_values_decode_to_defaults() {
        let (state, problem) = SubscriptionState::from_persisted(None, None);
        assert_eq!(state, SubscriptionState::new());
        assert!(problem.is_none());
    }

    #[test]
    fn only_literal_true_means_subscribed() {
        let (state, _) = SubscriptionState::from_persisted(Some("true"), None);
        assert!(state.is_subscribed);

        for other in ["false", "TRUE", "1", "yes", ""] {
            let (state, _) = SubscriptionState::from_persisted(Some(other), None);
            assert!(!state.is_subscribed, "{:?} should read as free", other);
        }
    }

    #[test]
    fn counter_decodes_decimal() {
        let (state, problem) = SubscriptionState::from_persisted(None, Some("4"));
        assert_eq!(state.search_count, 4);
        assert!(problem.is_none());
    }

    #[test]
    fn counter_without_digits_keeps_the_gate_closed() {
        for raw in ["NaN", "abc", " "] {
            let (state, problem) = SubscriptionState::from_persisted(None, Some(raw));
            assert_eq!(state.search_count, FREE_SEARCH_LIMIT, "{:?}", raw);
            assert!(!state.is_allowed_to_search(), "{:?}", raw);
            assert!(matches!(problem, Some(ValidationError::InvalidFormat { .. })));
        }
    }

    #[test]
    fn counter_reads_leading_digits() {
        let (state, problem) = SubscriptionState::from_persisted(None, Some("1.0"));
        assert_eq!(state.search_count, 1);
        assert!(!state.is_allowed_to_search());
        assert!(problem.is_some());

        let (state, _) = SubscriptionState::from_persisted(None, Some("2abc"));
        assert_eq!(state.search_count, 2);
        assert!(!state.is_allowed_to_search());
    }

    #[test]
    fn empty_counter_reads_as_zero() {
        let (state, problem) = SubscriptionState::from_persisted(None, Some(""));
        assert_eq!(state.search_count, 0);
        assert!(problem.is_none());
    }

    #[test]
    fn oversized_counter_saturates() {
        let (state, problem) =
            SubscriptionState::from_persisted(None, Some("99999999999999999999"));
        assert_eq!(state.search_count, u32::MAX);
        assert!(problem.is_some());
    }

    #[test]
    fn negative_counter_is_rejected() {
        assert!(parse_search_count("-1").is_err());
        let (state, problem) = SubscriptionState::from_persisted(None, Some("-1"));
        assert_eq!(state.search_count, 0);
        assert!(problem.is_some());
    }

    #[test]
    fn tier_reflects_state() {
        let mut state = SubscriptionState::new();
        state.record_search();
        assert_eq!(state.tier(), EntitlementTier::Free { search_count: 1 });
        state.subscribe();
        assert_eq!(state.tier(), EntitlementTier::Premium);
    }

    // Gate Properties

    proptest! {
        #[test]
        fn under_limit_is_allowed(n in 0u32..FREE_SEARCH_LIMIT) {
            let state = SubscriptionState { is_subscribed: false, search_count: n };
            prop_assert!(state.is_allowed_to_search());
        }

        #[test]
        fn at_or_over_limit_is_blocked(n in FREE_SEARCH_LIMIT..u32::MAX) {
            let state = SubscriptionState { is_subscribed: false, search_count: n };
            prop_assert!(!state.is_allowed_to_search());
        }

        #[test]
        fn subscribed_is_always_allowed(n in any::<u32>()) {
            let state = SubscriptionState { is_subscribed: true, search_count: n };
            prop_assert!(state.is_allowed_to_search());
        }

        #[test]
        fn k_free_searches_count_to_k(k in 0u32..50) {
            let mut state = SubscriptionState::new();
            for _ in 0..k {
                state.record_search();
            }
            prop_assert_eq!(state.search_count, k);
            prop_assert_eq!(state.is_allowed_to_search(), k < FREE_SEARCH_LIMIT);
        }

        #[test]
        fn persisted_counter_survives_decoding(n in any::<u32>()) {
            let raw = n.to_string();
            let (state, problem) = SubscriptionState::from_persisted(None, Some(&raw));
            prop_assert!(problem.is_none());
            prop_assert_eq!(state.search_count, n);
        }
    }
}
