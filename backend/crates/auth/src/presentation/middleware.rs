//! Session Guard Middleware
//!
//! Runs [`GuardSessionUseCase`] for requests inside the configured route
//! scope and turns its decision into a response. Everything outside the
//! scope is forwarded untouched.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::Response;
use platform::cookie::extract_cookie;
use platform::redirect::{login_redirect, temporary_redirect};

use crate::application::config::AuthConfig;
use crate::application::{GuardDecision, GuardRejection, GuardSessionUseCase};
use crate::domain::remote::TokenRenewer;
use crate::domain::value_object::{AccessToken, RefreshToken};

/// Middleware state
pub struct SessionGuardState<R>
where
    R: TokenRenewer + Send + Sync + 'static,
{
    pub renewer: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> SessionGuardState<R>
where
    R: TokenRenewer + Send + Sync + 'static,
{
    pub fn new(renewer: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { renewer, config }
    }
}

// Manual impl: only the Arcs are cloned, R itself need not be Clone
impl<R> Clone for SessionGuardState<R>
where
    R: TokenRenewer + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            renewer: self.renewer.clone(),
            config: self.config.clone(),
        }
    }
}

/// Middleware that keeps protected pages behind a usable session
///
/// Mount with `axum::middleware::from_fn_with_state`.
pub async fn require_session<R>(
    State(state): State<SessionGuardState<R>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    R: TokenRenewer + Send + Sync + 'static,
{
    let path = req.uri().path().to_string();

    if !state.config.protected_routes.contains(&path) {
        return next.run(req).await;
    }

    let headers = req.headers();
    let access_token =
        extract_cookie(headers, &state.config.access_cookie.name).and_then(AccessToken::new);
    let refresh_token =
        extract_cookie(headers, &state.config.refresh_cookie.name).and_then(RefreshToken::new);

    let use_case = GuardSessionUseCase::new(state.renewer.clone(), state.config.clone());

    match use_case.execute(access_token, refresh_token, &path).await {
        GuardDecision::Proceed => {
            tracing::debug!(path = %path, "Session credential present");
            next.run(req).await
        }
        GuardDecision::ProceedWithRenewed(token) => {
            let cookie = match state.config.access_cookie.set_cookie_header(token.as_str()) {
                Ok(cookie) => cookie,
                Err(e) => {
                    tracing::warn!(
                        path = %path,
                        reason = "renewal_transport_failure",
                        error = %e,
                        "Renewed access token is not a valid cookie value, redirecting to login"
                    );
                    return login_redirect(&state.config.login_path, &path);
                }
            };

            tracing::info!(path = %path, "Access token renewed");

            let mut response = next.run(req).await;
            response.headers_mut().append(header::SET_COOKIE, cookie);
            response
        }
        GuardDecision::RedirectToLogin { location, reason } => {
            log_rejection(&path, &reason);
            temporary_redirect(&location)
        }
    }
}

fn log_rejection(path: &str, reason: &GuardRejection) {
    match reason {
        GuardRejection::NoCredentials => {
            tracing::debug!(path = %path, reason = reason.as_str(), "No session, redirecting to login");
        }
        GuardRejection::RenewalRejected { status, detail } => {
            tracing::warn!(
                path = %path,
                reason = reason.as_str(),
                status,
                detail = ?detail,
                "Token renewal rejected, redirecting to login"
            );
        }
        GuardRejection::RenewalTransportFailure(error) => {
            tracing::warn!(
                path = %path,
                reason = reason.as_str(),
                error = %error,
                "Token renewal failed, redirecting to login"
            );
        }
    }
}
