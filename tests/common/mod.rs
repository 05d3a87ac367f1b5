#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use fitcoach_api::app::{app, AppState};
use fitcoach_api::auth::{generate_jwt, Claims};
use fitcoach_api::config::AppConfig;
use fitcoach_api::database::DatabaseError;
use fitcoach_api::onboarding::{
    AccountOrigin, MemoryOnboardingStore, OnboardingFacts, OnboardingStore, Role, RoleSet,
};

pub const SECRET: &str = "test-secret";
pub const TENANT: &str = "acme-fitness";
pub const DATABASE: &str = "tenant_acme";

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.security.jwt_secret = SECRET.to_string();
    config.api.enable_request_logging = false;
    config
}

/// Store whose every call fails as if the database were unreachable
pub struct UnreachableStore;

#[async_trait]
impl OnboardingStore for UnreachableStore {
    async fn read_facts(&self, _: &str, _: Uuid) -> Result<Option<OnboardingFacts>, DatabaseError> {
        Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn set_onboarding_completed(&self, _: &str, _: Uuid, _: bool) -> Result<bool, DatabaseError> {
        Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryOnboardingStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryOnboardingStore::new());
        let router = app(AppState::new(test_config(), store.clone()));
        Self { router, store }
    }

    pub fn unreachable() -> Self {
        let router = app(AppState::new(test_config(), Arc::new(UnreachableStore)));
        Self {
            router,
            store: Arc::new(MemoryOnboardingStore::new()),
        }
    }

    /// Insert a user and return its id
    pub async fn user(&self, completed: bool, origin: AccountOrigin, roles: &[Role]) -> Uuid {
        let user_id = Uuid::new_v4();
        self.store
            .insert(
                DATABASE,
                OnboardingFacts {
                    user_id,
                    onboarding_completed: completed,
                    origin,
                    roles: RoleSet::new(roles.iter().copied()),
                    has_cohort: false,
                },
            )
            .await;
        user_id
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Result<Response<Body>> {
        self.send("GET", uri, token).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>) -> Result<Response<Body>> {
        self.send("POST", uri, token).await
    }

    async fn send(&self, method: &str, uri: &str, token: Option<&str>) -> Result<Response<Body>> {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let response = self.router.clone().oneshot(request.body(Body::empty())?).await?;
        Ok(response)
    }
}

pub fn token_for(user_id: Uuid, roles: &[Role]) -> String {
    let claims = Claims::new(
        TENANT.to_string(),
        DATABASE.to_string(),
        user_id,
        RoleSet::new(roles.iter().copied()),
        1,
    );
    generate_jwt(&claims, SECRET).expect("test token")
}

pub async fn json_body(response: Response<Body>) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response.headers().get(header::LOCATION)?.to_str().ok()
}
