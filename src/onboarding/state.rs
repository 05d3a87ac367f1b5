use serde::{Deserialize, Serialize};
use std::fmt;

use super::facts::{AccountOrigin, OnboardingFacts, Role};

/// Where a user stands in first-time setup. Derived per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnboardingState {
    NotFound,
    OnboardingComplete,
    InvitedClientPending,
    SelfSignupClientPending,
    CoachPending,
    AdminPending,
}

impl OnboardingState {
    pub const ALL: [OnboardingState; 6] = [
        OnboardingState::NotFound,
        OnboardingState::OnboardingComplete,
        OnboardingState::InvitedClientPending,
        OnboardingState::SelfSignupClientPending,
        OnboardingState::CoachPending,
        OnboardingState::AdminPending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingState::NotFound => "NOT_FOUND",
            OnboardingState::OnboardingComplete => "ONBOARDING_COMPLETE",
            OnboardingState::InvitedClientPending => "INVITED_CLIENT_PENDING",
            OnboardingState::SelfSignupClientPending => "SELF_SIGNUP_CLIENT_PENDING",
            OnboardingState::CoachPending => "COACH_PENDING",
            OnboardingState::AdminPending => "ADMIN_PENDING",
        }
    }
}

impl fmt::Display for OnboardingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a user's facts. `None` means the identifier did not resolve.
///
/// Completion is checked before anything else. Past that the winning role
/// decides, and origin only matters for clients. A user with no roles at all
/// is onboarded as a client.
pub fn detect_onboarding_state(facts: Option<&OnboardingFacts>) -> OnboardingState {
    let Some(facts) = facts else {
        return OnboardingState::NotFound;
    };

    if facts.onboarding_completed {
        return OnboardingState::OnboardingComplete;
    }

    match facts.roles.primary() {
        Some(Role::Admin) => OnboardingState::AdminPending,
        Some(Role::Coach) => OnboardingState::CoachPending,
        Some(Role::Client) | None => {
            if facts.roles.is_empty() {
                tracing::warn!("User {} has no roles; onboarding as client", facts.user_id);
            }
            match facts.origin {
                AccountOrigin::Invited => OnboardingState::InvitedClientPending,
                AccountOrigin::SelfSignup => OnboardingState::SelfSignupClientPending,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::facts::RoleSet;
    use uuid::Uuid;

    fn facts(completed: bool, origin: AccountOrigin, roles: &[Role], has_cohort: bool) -> OnboardingFacts {
        OnboardingFacts {
            user_id: Uuid::new_v4(),
            onboarding_completed: completed,
            origin,
            roles: RoleSet::new(roles.iter().copied()),
            has_cohort,
        }
    }

    fn all_role_sets() -> Vec<Vec<Role>> {
        // Every subset of {Admin, Coach, Client}, including the empty one
        (0u8..8)
            .map(|mask| {
                Role::PRECEDENCE
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, r)| *r)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn unresolved_user_is_not_found() {
        assert_eq!(detect_onboarding_state(None), OnboardingState::NotFound);
    }

    #[test]
    fn completion_short_circuits_everything() {
        for roles in all_role_sets() {
            for origin in [AccountOrigin::Invited, AccountOrigin::SelfSignup] {
                for has_cohort in [true, false] {
                    let f = facts(true, origin, &roles, has_cohort);
                    assert_eq!(
                        detect_onboarding_state(Some(&f)),
                        OnboardingState::OnboardingComplete,
                        "roles={:?} origin={:?} cohort={}",
                        roles,
                        origin,
                        has_cohort
                    );
                }
            }
        }
    }

    #[test]
    fn client_origin_splits_pending_state() {
        let invited = facts(false, AccountOrigin::Invited, &[Role::Client], false);
        let self_signup = facts(false, AccountOrigin::SelfSignup, &[Role::Client], false);
        assert_eq!(detect_onboarding_state(Some(&invited)), OnboardingState::InvitedClientPending);
        assert_eq!(detect_onboarding_state(Some(&self_signup)), OnboardingState::SelfSignupClientPending);
    }

    #[test]
    fn cohort_membership_does_not_change_client_state() {
        let with = facts(false, AccountOrigin::SelfSignup, &[Role::Client], true);
        let without = facts(false, AccountOrigin::SelfSignup, &[Role::Client], false);
        assert_eq!(detect_onboarding_state(Some(&with)), detect_onboarding_state(Some(&without)));
    }

    #[test]
    fn admin_wins_over_client_for_any_origin() {
        for origin in [AccountOrigin::Invited, AccountOrigin::SelfSignup] {
            let f = facts(false, origin, &[Role::Client, Role::Admin], false);
            assert_eq!(detect_onboarding_state(Some(&f)), OnboardingState::AdminPending);
        }
    }

    #[test]
    fn coach_ignores_origin() {
        for origin in [AccountOrigin::Invited, AccountOrigin::SelfSignup] {
            let f = facts(false, origin, &[Role::Coach], false);
            assert_eq!(detect_onboarding_state(Some(&f)), OnboardingState::CoachPending);
        }
        let both = facts(false, AccountOrigin::Invited, &[Role::Coach, Role::Client], true);
        assert_eq!(detect_onboarding_state(Some(&both)), OnboardingState::CoachPending);
    }

    #[test]
    fn empty_role_set_is_onboarded_as_client() {
        let invited = facts(false, AccountOrigin::Invited, &[], false);
        let self_signup = facts(false, AccountOrigin::SelfSignup, &[], false);
        assert_eq!(detect_onboarding_state(Some(&invited)), OnboardingState::InvitedClientPending);
        assert_eq!(detect_onboarding_state(Some(&self_signup)), OnboardingState::SelfSignupClientPending);
    }

    #[test]
    fn every_combination_is_classified_as_pending_when_incomplete() {
        for roles in all_role_sets() {
            for origin in [AccountOrigin::Invited, AccountOrigin::SelfSignup] {
                for has_cohort in [true, false] {
                    let state = detect_onboarding_state(Some(&facts(false, origin, &roles, has_cohort)));
                    assert!(
                        !matches!(state, OnboardingState::NotFound | OnboardingState::OnboardingComplete),
                        "roles={:?} produced {}",
                        roles,
                        state
                    );
                }
            }
        }
    }

    #[test]
    fn state_serializes_as_screaming_snake_tag() {
        for state in OnboardingState::ALL {
            assert_eq!(serde_json::to_value(state).unwrap(), serde_json::json!(state.as_str()));
        }
    }
}
