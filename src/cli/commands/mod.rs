pub mod onboarding;
pub mod token;
