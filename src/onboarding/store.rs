use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::models::UserOnboardingRow;
use crate::database::{DatabaseError, DatabaseManager};

use super::facts::OnboardingFacts;

/// Read/write access to the facts onboarding detection runs on.
///
/// Every call goes to the backing store. Nothing is cached, so a coach
/// inviting a client between two calls is visible on the second one.
#[async_trait]
pub trait OnboardingStore: Send + Sync {
    /// `Ok(None)` when the user does not exist (or is deleted) in the tenant database.
    async fn read_facts(&self, database: &str, user_id: Uuid) -> Result<Option<OnboardingFacts>, DatabaseError>;

    /// Returns `false` when no such user exists.
    async fn set_onboarding_completed(
        &self,
        database: &str,
        user_id: Uuid,
        completed: bool,
    ) -> Result<bool, DatabaseError>;

    /// Check the backing store is reachable.
    async fn ping(&self) -> Result<(), DatabaseError>;
}

/// Postgres store over the tenant `users` and `cohort_members` tables
#[derive(Debug, Default, Clone)]
pub struct PgOnboardingStore;

impl PgOnboardingStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OnboardingStore for PgOnboardingStore {
    async fn read_facts(&self, database: &str, user_id: Uuid) -> Result<Option<OnboardingFacts>, DatabaseError> {
        let pool = DatabaseManager::tenant_pool(database).await?;

        let row = sqlx::query_as::<_, UserOnboardingRow>(
            r#"
            SELECT
                u.id, u.onboarding_completed, u.invited_by, u.roles,
                EXISTS (SELECT 1 FROM cohort_members m WHERE m.user_id = u.id) AS has_cohort
            FROM users u
            WHERE u.id = $1
            AND u.deleted_at IS NULL
            "#,
        )
        .bind(user_id)
        .fetch_optional(&pool)
        .await?;

        row.map(OnboardingFacts::try_from)
            .transpose()
            .map_err(|e| DatabaseError::QueryError(format!("user {} in '{}': {}", user_id, database, e)))
    }

    async fn set_onboarding_completed(
        &self,
        database: &str,
        user_id: Uuid,
        completed: bool,
    ) -> Result<bool, DatabaseError> {
        let pool = DatabaseManager::tenant_pool(database).await?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET onboarding_completed = $2, updated_at = NOW()
            WHERE id = $1
            AND deleted_at IS NULL
            "#,
        )
        .bind(user_id)
        .bind(completed)
        .execute(&pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check().await
    }
}

/// In-process store keyed by tenant database and user id.
/// Backs local development and the HTTP tests.
#[derive(Debug, Default)]
pub struct MemoryOnboardingStore {
    users: RwLock<HashMap<(String, Uuid), OnboardingFacts>>,
}

impl MemoryOnboardingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, database: &str, facts: OnboardingFacts) {
        self.users
            .write()
            .await
            .insert((database.to_string(), facts.user_id), facts);
    }

    pub async fn remove(&self, database: &str, user_id: Uuid) -> Option<OnboardingFacts> {
        self.users.write().await.remove(&(database.to_string(), user_id))
    }
}

#[async_trait]
impl OnboardingStore for MemoryOnboardingStore {
    async fn read_facts(&self, database: &str, user_id: Uuid) -> Result<Option<OnboardingFacts>, DatabaseError> {
        Ok(self.users.read().await.get(&(database.to_string(), user_id)).cloned())
    }

    async fn set_onboarding_completed(
        &self,
        database: &str,
        user_id: Uuid,
        completed: bool,
    ) -> Result<bool, DatabaseError> {
        let mut users = self.users.write().await;
        match users.get_mut(&(database.to_string(), user_id)) {
            Some(facts) => {
                facts.onboarding_completed = completed;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
