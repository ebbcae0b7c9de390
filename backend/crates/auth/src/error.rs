//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No access token cookie on a request that needs one
    #[error("Not signed in")]
    NotSignedIn,

    /// Form input rejected before reaching the API
    #[error("{0}")]
    InvalidInput(AppError),

    /// The blog API answered with a non-success status
    #[error("Upstream rejected request with status {status}")]
    Upstream { status: u16, detail: Option<String> },

    /// The blog API could not be reached
    #[error("Upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The blog API answered 2xx with a body we cannot read
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::NotSignedIn => ErrorKind::Unauthorized,
            AuthError::InvalidInput(err) => err.kind(),
            AuthError::Upstream { status, .. } => ErrorKind::from_upstream_status(*status),
            AuthError::Transport(e) if e.is_timeout() => ErrorKind::GatewayTimeout,
            AuthError::Transport(_) | AuthError::InvalidResponse(_) => ErrorKind::BadGateway,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Upstream client errors keep the API's `detail` so the form can show
    /// it; upstream server errors and transport problems get a generic
    /// message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::NotSignedIn => {
                AppError::unauthorized("Not signed in").with_action("Sign in and try again")
            }
            AuthError::InvalidInput(err) => {
                let mapped = AppError::new(err.kind(), err.message().to_string());
                match err.action() {
                    Some(action) => mapped.with_action(action.to_string()),
                    None => mapped,
                }
            }
            AuthError::Upstream { status, detail } if (400..500).contains(status) => {
                AppError::upstream(
                    *status,
                    detail
                        .clone()
                        .unwrap_or_else(|| "Request was rejected".to_string()),
                )
            }
            AuthError::Upstream { status, .. } => AppError::upstream(
                *status,
                "Authentication service failed to handle the request",
            ),
            AuthError::Transport(_) | AuthError::InvalidResponse(_) => {
                AppError::new(self.kind(), "Authentication service is unavailable")
                    .with_action("Please try again in a moment")
            }
            AuthError::Internal(_) => AppError::internal("Internal error"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Transport(e) => {
                tracing::error!(error = %e, "Auth API unreachable");
            }
            AuthError::InvalidResponse(msg) => {
                tracing::error!(message = %msg, "Auth API returned an unreadable response");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Upstream { status, detail } if *status >= 500 => {
                tracing::error!(status, detail = ?detail, "Auth API server error");
            }
            AuthError::Upstream { status, detail } => {
                tracing::warn!(status, detail = ?detail, "Auth API rejected request");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let app_error = self.to_app_error();
        match self {
            AuthError::Transport(e) => app_error.with_source(e),
            _ => app_error,
        }
        .into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            AuthError::InvalidInput(err)
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_client_error_keeps_detail() {
        let err = AuthError::Upstream {
            status: 401,
            detail: Some("Invalid email or password".to_string()),
        };
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 401);
        assert_eq!(app.message(), "Invalid email or password");
    }

    #[test]
    fn test_upstream_server_error_hides_detail() {
        let err = AuthError::Upstream {
            status: 500,
            detail: Some("Traceback (most recent call last)".to_string()),
        };
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 502);
        assert!(!app.message().contains("Traceback"));
    }

    #[test]
    fn test_invalid_input_from_app_error() {
        let err: AuthError = AppError::bad_request("Invalid email format").into();
        assert!(matches!(err, AuthError::InvalidInput(_)));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.to_app_error().message(), "Invalid email format");

        let err: AuthError = AppError::internal("boom").into();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_not_signed_in_response() {
        let response = AuthError::NotSignedIn.into_response();
        assert_eq!(response.status().as_u16(), 401);
    }

    #[test]
    fn test_invalid_response_is_bad_gateway() {
        assert_eq!(
            AuthError::InvalidResponse("missing access_token".into()).kind(),
            ErrorKind::BadGateway
        );
    }
}
