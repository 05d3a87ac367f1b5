// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Every handler here receives the caller's AuthUser from jwt_auth_middleware
// and only ever looks at the caller's own record in their tenant database.

pub mod home;
pub mod onboarding;

pub use home::home_get;
pub use onboarding::{onboarding_complete_post, onboarding_status_get};
