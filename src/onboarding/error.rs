use thiserror::Error;
use uuid::Uuid;

use crate::database::DatabaseError;

/// Failures surfaced by onboarding detection. Callers pick the degradation policy.
#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Failed to read onboarding facts: {0}")]
    DataAccess(#[from] DatabaseError),
}
