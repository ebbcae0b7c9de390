//! Shared Kernel - Domain-crossing minimal core
//!
//! Holds the error vocabulary every gateway crate agrees on:
//! - [`error::kind::ErrorKind`] classification mapped to HTTP status
//! - [`error::app_error::AppError`] and the [`error::app_error::AppResult`] alias
//!
//! Only things with the same meaning in every crate belong here.

pub mod error {
    pub mod app_error;
    #[cfg(feature = "axum")]
    pub mod conversions;
    pub mod kind;
}
