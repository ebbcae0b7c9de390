//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_user;
pub mod guard_session;
pub mod password_reset;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use guard_session::{GuardDecision, GuardRejection, GuardSessionUseCase};
pub use password_reset::{PasswordResetUseCase, ResetPasswordInput};
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
