use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::state::OnboardingState;

/// Destination a user is sent to after onboarding detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingRoute {
    Dashboard,
    InvitedClient,
    SelfSignupClient,
    Coach,
    Admin,
}

impl OnboardingRoute {
    pub const DASHBOARD_PATH: &'static str = "/dashboard";

    pub fn path(&self) -> &'static str {
        match self {
            OnboardingRoute::Dashboard => Self::DASHBOARD_PATH,
            OnboardingRoute::InvitedClient => "/onboarding/invited",
            OnboardingRoute::SelfSignupClient => "/onboarding/client",
            OnboardingRoute::Coach => "/onboarding/coach",
            OnboardingRoute::Admin => "/onboarding/admin",
        }
    }
}

impl fmt::Display for OnboardingRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// `NotFound` has no destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no onboarding route for a user that does not exist")]
pub struct RouteNotFound;

/// Map a state to its destination.
///
/// The caller turns `RouteNotFound` into a 404 (or, on the home page, its
/// dashboard fallback).
pub fn get_onboarding_route(state: OnboardingState) -> Result<OnboardingRoute, RouteNotFound> {
    match state {
        OnboardingState::NotFound => Err(RouteNotFound),
        OnboardingState::OnboardingComplete => Ok(OnboardingRoute::Dashboard),
        OnboardingState::InvitedClientPending => Ok(OnboardingRoute::InvitedClient),
        OnboardingState::SelfSignupClientPending => Ok(OnboardingRoute::SelfSignupClient),
        OnboardingState::CoachPending => Ok(OnboardingRoute::Coach),
        OnboardingState::AdminPending => Ok(OnboardingRoute::Admin),
    }
}

/// `{ route, state }` as returned by the onboarding-status API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingDecision {
    pub route: String,
    pub state: OnboardingState,
}

impl OnboardingDecision {
    pub fn new(route: OnboardingRoute, state: OnboardingState) -> Self {
        Self {
            route: route.path().to_string(),
            state,
        }
    }
}
