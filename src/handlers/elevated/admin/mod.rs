// handlers/elevated/admin/mod.rs - Tenant admin tooling

pub mod onboarding;

pub use onboarding::{user_onboarding_get, user_onboarding_reset_post};
