use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::database::DatabaseError;

use super::error::OnboardingError;
use super::facts::OnboardingFacts;
use super::route::{get_onboarding_route, OnboardingDecision, OnboardingRoute};
use super::state::{detect_onboarding_state, OnboardingState};
use super::store::OnboardingStore;

/// Reader -> classifier -> router, plus the completion writes around them.
#[derive(Clone)]
pub struct OnboardingService {
    store: Arc<dyn OnboardingStore>,
    audit: bool,
}

impl OnboardingService {
    pub fn new(store: Arc<dyn OnboardingStore>) -> Self {
        Self { store, audit: false }
    }

    /// Emit completion changes on the `audit` tracing target
    pub fn with_audit_logging(mut self, enabled: bool) -> Self {
        self.audit = enabled;
        self
    }

    pub async fn detect_state(&self, database: &str, user_id: Uuid) -> Result<OnboardingState, OnboardingError> {
        let facts = self.store.read_facts(database, user_id).await?;
        Ok(detect_onboarding_state(facts.as_ref()))
    }

    /// `{ route, state }` for one user. Not-found and read failures stay distinct.
    pub async fn resolve(&self, database: &str, user_id: Uuid) -> Result<OnboardingDecision, OnboardingError> {
        let (route, state) = self.route_for(database, user_id).await?;
        Ok(OnboardingDecision::new(route, state))
    }

    async fn route_for(
        &self,
        database: &str,
        user_id: Uuid,
    ) -> Result<(OnboardingRoute, OnboardingState), OnboardingError> {
        let state = self.detect_state(database, user_id).await?;
        let route = Self::route(user_id, state)?;
        debug!("Onboarding for {} in '{}': {} -> {}", user_id, database, state, route);
        Ok((route, state))
    }

    /// Decision plus the facts it was derived from
    pub async fn inspect(
        &self,
        database: &str,
        user_id: Uuid,
    ) -> Result<(OnboardingDecision, OnboardingFacts), OnboardingError> {
        let facts = self
            .store
            .read_facts(database, user_id)
            .await?
            .ok_or(OnboardingError::UserNotFound(user_id))?;
        Ok((Self::decide(user_id, &facts)?, facts))
    }

    fn decide(user_id: Uuid, facts: &OnboardingFacts) -> Result<OnboardingDecision, OnboardingError> {
        let state = detect_onboarding_state(Some(facts));
        let route = Self::route(user_id, state)?;
        Ok(OnboardingDecision::new(route, state))
    }

    fn route(user_id: Uuid, state: OnboardingState) -> Result<OnboardingRoute, OnboardingError> {
        get_onboarding_route(state).map_err(|_| OnboardingError::UserNotFound(user_id))
    }

    /// Where the home page sends this user. Any detection failure lands on the
    /// dashboard so a broken check never locks an onboarded user out.
    pub async fn home_destination(&self, database: &str, user_id: Uuid) -> &'static str {
        match self.route_for(database, user_id).await {
            Ok((route, _)) => route.path(),
            Err(OnboardingError::UserNotFound(_)) => {
                warn!("Home redirect: user {} not found in '{}', using dashboard", user_id, database);
                OnboardingRoute::DASHBOARD_PATH
            }
            Err(e) => {
                error!("Home redirect: onboarding check failed for {}: {}", user_id, e);
                OnboardingRoute::DASHBOARD_PATH
            }
        }
    }

    /// Mark the user's onboarding finished. Once the write lands the user is
    /// complete whatever their roles, so no second read is needed.
    pub async fn complete(&self, database: &str, user_id: Uuid) -> Result<OnboardingDecision, OnboardingError> {
        self.set_completed(database, user_id, true, user_id).await?;
        let state = OnboardingState::OnboardingComplete;
        Ok(OnboardingDecision::new(Self::route(user_id, state)?, state))
    }

    /// Clear the completion flag on behalf of `actor` (admin tooling)
    pub async fn reset(
        &self,
        database: &str,
        user_id: Uuid,
        actor: Uuid,
    ) -> Result<OnboardingDecision, OnboardingError> {
        let mut facts = self
            .store
            .read_facts(database, user_id)
            .await?
            .ok_or(OnboardingError::UserNotFound(user_id))?;
        self.set_completed(database, user_id, false, actor).await?;
        facts.onboarding_completed = false;
        Self::decide(user_id, &facts)
    }

    /// Reachability of the backing store, for `/health`
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        self.store.ping().await
    }

    async fn set_completed(
        &self,
        database: &str,
        user_id: Uuid,
        completed: bool,
        actor: Uuid,
    ) -> Result<(), OnboardingError> {
        if !self.store.set_onboarding_completed(database, user_id, completed).await? {
            return Err(OnboardingError::UserNotFound(user_id));
        }

        if self.audit {
            info!(
                target: "audit",
                database,
                user_id = %user_id,
                actor = %actor,
                completed,
                "onboarding completion changed"
            );
        }
        Ok(())
    }
}
