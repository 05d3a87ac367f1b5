// handlers/protected/home.rs - GET /home handler

use axum::{
    extract::{Extension, State},
    response::Redirect,
};

use crate::app::AppState;
use crate::middleware::AuthUser;

/// GET /home - send the caller to the dashboard or their onboarding step.
///
/// Never fails on detection problems: unknown users and read errors both
/// redirect to the dashboard.
pub async fn home_get(State(state): State<AppState>, Extension(user): Extension<AuthUser>) -> Redirect {
    let destination = state.onboarding.home_destination(&user.database, user.user_id).await;
    Redirect::to(destination)
}
