//! Onboarding detection and routing.
//!
//! A user's persisted account facts are read fresh on every call, classified
//! into one `OnboardingState`, and mapped to a destination path. The home
//! page and the onboarding API both go through `OnboardingService` so they
//! can never disagree about where a user belongs.

pub mod error;
pub mod facts;
pub mod route;
pub mod service;
pub mod state;
pub mod store;

pub use error::OnboardingError;
pub use facts::{AccountOrigin, OnboardingFacts, Role, RoleParseError, RoleSet};
pub use route::{get_onboarding_route, OnboardingDecision, OnboardingRoute, RouteNotFound};
pub use service::OnboardingService;
pub use state::{detect_onboarding_state, OnboardingState};
pub use store::{MemoryOnboardingStore, OnboardingStore, PgOnboardingStore};
