pub mod user;

pub use user::UserOnboardingRow;
