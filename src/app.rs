use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers::{elevated, protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::onboarding::{OnboardingService, OnboardingStore};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub onboarding: OnboardingService,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn OnboardingStore>) -> Self {
        let onboarding = OnboardingService::new(store).with_audit_logging(config.security.enable_audit_logging);
        Self {
            config: Arc::new(config),
            onboarding,
        }
    }
}

pub fn app(state: AppState) -> Router {
    let mut router = public_routes(state.clone())
        // Authenticated
        .merge(protected_routes(state.clone()))
        .merge(admin_routes(state.clone()));

    if state.config.security.enable_cors {
        router = router.layer(cors_layer(&state.config));
    }
    if state.config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

fn public_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .with_state(state)
}

fn protected_routes(state: AppState) -> Router {
    Router::new()
        .route("/home", get(protected::home_get))
        .route("/api/onboarding/status", get(protected::onboarding_status_get))
        .route("/api/onboarding/complete", post(protected::onboarding_complete_post))
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware))
        .with_state(state)
}

fn admin_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/admin/users/:user_id/onboarding", get(elevated::user_onboarding_get))
        .route(
            "/api/admin/users/:user_id/onboarding/reset",
            post(elevated::user_onboarding_reset_post),
        )
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware))
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
