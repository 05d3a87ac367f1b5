use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Account roles. A user may hold several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Coach,
    Client,
}

impl Role {
    /// Highest precedence first. Decides which onboarding path a multi-role user takes.
    pub const PRECEDENCE: [Role; 3] = [Role::Admin, Role::Coach, Role::Client];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Coach => "COACH",
            Role::Client => "CLIENT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized role '{0}'")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "COACH" => Ok(Role::Coach),
            "CLIENT" => Ok(Role::Client),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

/// The set of roles held by one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        Self(roles.into_iter().collect())
    }

    /// Parse database role strings; any unknown role fails the whole set.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, RoleParseError> {
        raw.iter()
            .map(|s| s.as_ref().parse::<Role>())
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.contains(Role::Admin)
    }

    pub fn is_coach(&self) -> bool {
        self.contains(Role::Coach)
    }

    pub fn is_client(&self) -> bool {
        self.contains(Role::Client)
    }

    /// The role that wins under `Role::PRECEDENCE`, or None for an empty set
    pub fn primary(&self) -> Option<Role> {
        Role::PRECEDENCE.into_iter().find(|role| self.contains(*role))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// How the account came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountOrigin {
    /// Created by a coach or admin invitation
    Invited,
    SelfSignup,
}

/// Everything the classifier is allowed to look at for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingFacts {
    pub user_id: Uuid,
    pub onboarding_completed: bool,
    pub origin: AccountOrigin,
    pub roles: RoleSet,
    pub has_cohort: bool,
}
