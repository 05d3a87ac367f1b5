// handlers/public/system.rs - GET / and GET /health

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "FitCoach API",
            "version": version,
            "endpoints": {
                "health": "/health (public)",
                "home": "/home (protected - redirects to dashboard or onboarding)",
                "onboarding": "/api/onboarding/status, /api/onboarding/complete (protected)",
                "admin": "/api/admin/users/:user_id/onboarding[/reset] (admin)",
            }
        }
    }))
}

/// GET /health - checks the onboarding store the API actually reads from
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    state.onboarding.ping().await?;

    Ok(ApiResponse::success(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "database": "ok"
    })))
}
