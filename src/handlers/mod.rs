// handlers/mod.rs - 3-tier handler layout
//
// Public (no auth) → Protected (JWT auth) → Elevated (JWT auth + ADMIN role)
pub mod public;    // Tier 1: service info and health (/, /health)
pub mod protected; // Tier 2: the caller's own onboarding (/home, /api/onboarding/*)
pub mod elevated;  // Tier 3: tenant admin tooling (/api/admin/*)
