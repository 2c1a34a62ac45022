//! GetProfileHandler - Query handler for the profile screen.

use serde::Serialize;
use std::sync::Arc;

use crate::application::SessionState;
use crate::domain::entitlement::{EntitlementTier, UserProfile};

/// Profile together with the current entitlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub profile: UserProfile,
    pub is_subscribed: bool,
    pub search_count: u32,
    pub free_search_limit: u32,
    /// `None` while subscribed.
    pub remaining_free_searches: Option<u32>,
    pub tier: EntitlementTier,
}

/// Handler for the profile view.
pub struct GetProfileHandler {
    session: Arc<SessionState>,
}

impl GetProfileHandler {
    pub fn new(session: Arc<SessionState>) -> Self {
        Self { session }
    }

    pub async fn handle(&self) -> ProfileView {
        let state = self.session.snapshot().await;
        ProfileView {
            profile: self.session.user_profile(),
            is_subscribed: state.is_subscribed,
            search_count: state.search_count,
            free_search_limit: self.session.free_search_limit(),
            remaining_free_searches: state.remaining_free_searches(),
            tier: state.tier(),
        }
    }
}
