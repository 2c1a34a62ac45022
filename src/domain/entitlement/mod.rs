//! Entitlement domain module.
//!
//! Free-tier quota, subscription flag and the local user profile.
//!
//! # Module Structure
//!
//! - `state` - SubscriptionState and the search gate
//! - `tier` - EntitlementTier view (Free / Premium)
//! - `profile` - UserProfile placeholder

mod profile;
mod state;
mod tier;

pub use profile::UserProfile;
pub use state::{parse_search_count, SubscriptionState, FREE_SEARCH_LIMIT, SUBSCRIBED_FLAG};
pub use tier::EntitlementTier;
