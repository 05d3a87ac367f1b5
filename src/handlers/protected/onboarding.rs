// handlers/protected/onboarding.rs - /api/onboarding/* handlers

use axum::{
    extract::{Extension, State},
    Json,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::onboarding::OnboardingDecision;

/// GET /api/onboarding/status
///
/// ```json
/// { "route": "/onboarding/invited", "state": "INVITED_CLIENT_PENDING" }
/// ```
///
/// 404 when the caller's user record no longer exists, 500 when the read fails.
pub async fn onboarding_status_get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<OnboardingDecision>, ApiError> {
    let decision = state.onboarding.resolve(&user.database, user.user_id).await?;
    Ok(Json(decision))
}

/// POST /api/onboarding/complete - finish onboarding for the caller
pub async fn onboarding_complete_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<OnboardingDecision>, ApiError> {
    let decision = state.onboarding.complete(&user.database, user.user_id).await?;
    tracing::info!("User {} completed onboarding in tenant '{}'", user.user_id, user.tenant);
    Ok(Json(decision))
}
