//! Auth (Session) Gateway Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credentials, route scope, traits for the blog API
//! - `application/` - Use cases and application services
//! - `infra/` - reqwest client for the blog API
//! - `presentation/` - Session guard middleware, HTTP handlers, DTOs, router
//!
//! ## Features
//! - Session guard for protected pages with one silent token renewal
//! - Login / registration forms proxied to the blog API, tokens kept in cookies
//! - Logout, forgot/reset password, current user
//!
//! ## Security Model
//! - Tokens are opaque here; the blog API judges validity
//! - Session cookies are `Secure`, `SameSite=Strict`, site-wide
//! - Token values never appear in logs or `Debug` output

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::http::HttpAuthApi;
pub use presentation::middleware::{SessionGuardState, require_session};
pub use presentation::router::session_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
