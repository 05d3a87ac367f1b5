// handlers/elevated/mod.rs - Elevated handlers (JWT + ADMIN role required)
//
// Admins act on other users, but only inside the tenant database named in
// their own token. Cross-tenant access is not possible from this tier.

pub mod admin;

pub use admin::*;
