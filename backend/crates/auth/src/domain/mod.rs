//! Domain Layer
//!
//! Contains entities, value objects, and the traits the blog API is
//! reached through.

pub mod entity;
pub mod remote;
pub mod renewal;
pub mod value_object;

// Re-exports
pub use entity::{IssuedSession, UserProfile};
pub use remote::{AccountService, PasswordReset, Registration, TokenRenewer};
pub use renewal::RenewalOutcome;
