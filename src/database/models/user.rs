use sqlx::FromRow;
use uuid::Uuid;

use crate::onboarding::{AccountOrigin, OnboardingFacts, RoleParseError, RoleSet};

/// Projection of a tenant `users` row plus cohort membership presence
#[derive(Debug, Clone, FromRow)]
pub struct UserOnboardingRow {
    pub id: Uuid,
    pub onboarding_completed: bool,
    pub invited_by: Option<Uuid>,
    pub roles: Vec<String>,
    pub has_cohort: bool,
}

impl TryFrom<UserOnboardingRow> for OnboardingFacts {
    type Error = RoleParseError;

    fn try_from(row: UserOnboardingRow) -> Result<Self, Self::Error> {
        let origin = match row.invited_by {
            Some(_) => AccountOrigin::Invited,
            None => AccountOrigin::SelfSignup,
        };

        Ok(OnboardingFacts {
            user_id: row.id,
            onboarding_completed: row.onboarding_completed,
            origin,
            roles: RoleSet::parse(&row.roles)?,
            has_cohort: row.has_cohort,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::Role;

    fn row(invited_by: Option<Uuid>, roles: &[&str]) -> UserOnboardingRow {
        UserOnboardingRow {
            id: Uuid::new_v4(),
            onboarding_completed: false,
            invited_by,
            roles: roles.iter().map(|r| r.to_string()).collect(),
            has_cohort: true,
        }
    }

    #[test]
    fn inviter_marks_account_as_invited() {
        let facts = OnboardingFacts::try_from(row(Some(Uuid::new_v4()), &["CLIENT"])).unwrap();
        assert_eq!(facts.origin, AccountOrigin::Invited);
        assert!(facts.has_cohort);

        let facts = OnboardingFacts::try_from(row(None, &["CLIENT"])).unwrap();
        assert_eq!(facts.origin, AccountOrigin::SelfSignup);
    }

    #[test]
    fn converts_role_strings() {
        let facts = OnboardingFacts::try_from(row(None, &["COACH", "CLIENT"])).unwrap();
        assert_eq!(facts.roles.primary(), Some(Role::Coach));
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(OnboardingFacts::try_from(row(None, &["SUPERUSER"])).is_err());
    }
}
