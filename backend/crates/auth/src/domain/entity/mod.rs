//! Entity Module

pub mod issued_session;
pub mod user_profile;

pub use issued_session::IssuedSession;
pub use user_profile::UserProfile;
