// handlers/elevated/admin/onboarding.rs - /api/admin/users/:user_id/onboarding handlers

use axum::extract::{Extension, Path, State};
use serde::Serialize;
use uuid::Uuid;

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::onboarding::{OnboardingDecision, OnboardingFacts};

#[derive(Debug, Serialize)]
pub struct UserOnboardingView {
    #[serde(flatten)]
    pub decision: OnboardingDecision,
    pub facts: OnboardingFacts,
}

/// GET /api/admin/users/:user_id/onboarding - decision and the facts behind it
pub async fn user_onboarding_get(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<UserOnboardingView> {
    admin.require_admin()?;

    let (decision, facts) = state.onboarding.inspect(&admin.database, user_id).await?;
    Ok(ApiResponse::success(UserOnboardingView { decision, facts }))
}

/// POST /api/admin/users/:user_id/onboarding/reset - send a user back through onboarding
pub async fn user_onboarding_reset_post(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<OnboardingDecision> {
    admin.require_admin()?;

    let decision = state.onboarding.reset(&admin.database, user_id, admin.user_id).await?;
    tracing::info!("Admin {} reset onboarding for {} in tenant '{}'", admin.user_id, user_id, admin.tenant);
    Ok(ApiResponse::success(decision))
}
