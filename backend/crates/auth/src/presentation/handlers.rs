//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse, Response};
use std::sync::Arc;

use platform::cookie::{CookieConfig, extract_cookie};

use crate::application::config::AuthConfig;
use crate::application::{
    CurrentUserUseCase, PasswordResetUseCase, ResetPasswordInput, SignInInput, SignInUseCase,
    SignUpInput, SignUpUseCase,
};
use crate::domain::entity::{IssuedSession, UserProfile};
use crate::domain::remote::AccountService;
use crate::domain::value_object::AccessToken;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    ResetPasswordRequest, SessionResponse, SessionStatusResponse,
};

const FORGOT_PASSWORD_DEFAULT_MESSAGE: &str =
    "If an account exists for that email, a password reset link has been sent.";
const RESET_PASSWORD_DEFAULT_MESSAGE: &str = "Password updated successfully.";

/// Shared state for session handlers
pub struct AuthAppState<A>
where
    A: AccountService + Send + Sync + 'static,
{
    pub accounts: Arc<A>,
    pub config: Arc<AuthConfig>,
}

impl<A> Clone for AuthAppState<A>
where
    A: AccountService + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            accounts: self.accounts.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Login / Register
// ============================================================================

/// POST /api/session/login
pub async fn login<A>(
    State(state): State<AuthAppState<A>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Response>
where
    A: AccountService + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.accounts.clone());

    let session = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    session_response(&state.config, session)
}

/// POST /api/session/register
pub async fn register<A>(
    State(state): State<AuthAppState<A>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<Response>
where
    A: AccountService + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.accounts.clone());

    let session = use_case
        .execute(SignUpInput {
            email: req.email,
            password: req.password,
            username: req.username,
            first_name: req.first_name,
            last_name: req.last_name,
        })
        .await?;

    session_response(&state.config, session)
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/session/logout
///
/// Tokens are stateless upstream, so signing out is clearing the cookies.
pub async fn logout<A>(State(state): State<AuthAppState<A>>) -> AuthResult<impl IntoResponse>
where
    A: AccountService + Send + Sync + 'static,
{
    let clear_access = state
        .config
        .access_cookie
        .delete_cookie_header()
        .map_err(|e| AuthError::Internal(format!("Invalid cookie config: {e}")))?;
    let clear_refresh = state
        .config
        .refresh_cookie
        .delete_cookie_header()
        .map_err(|e| AuthError::Internal(format!("Invalid cookie config: {e}")))?;

    tracing::debug!("Session cookies cleared");

    Ok((
        StatusCode::NO_CONTENT,
        AppendHeaders([
            (header::SET_COOKIE, clear_access),
            (header::SET_COOKIE, clear_refresh),
        ]),
    ))
}

// ============================================================================
// Password Reset
// ============================================================================

/// POST /api/session/forgot-password
pub async fn forgot_password<A>(
    State(state): State<AuthAppState<A>>,
    Json(req): Json<ForgotPasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    A: AccountService + Send + Sync + 'static,
{
    let use_case = PasswordResetUseCase::new(state.accounts.clone());
    let message = use_case.request(req.email).await?;

    Ok(Json(MessageResponse {
        message: message.unwrap_or_else(|| FORGOT_PASSWORD_DEFAULT_MESSAGE.to_string()),
    }))
}

/// POST /api/session/reset-password
pub async fn reset_password<A>(
    State(state): State<AuthAppState<A>>,
    Json(req): Json<ResetPasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    A: AccountService + Send + Sync + 'static,
{
    let use_case = PasswordResetUseCase::new(state.accounts.clone());
    let message = use_case
        .reset(ResetPasswordInput {
            new_password: req.new_password,
            access_token: req.access_token,
            refresh_token: req.refresh_token,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: message.unwrap_or_else(|| RESET_PASSWORD_DEFAULT_MESSAGE.to_string()),
    }))
}

// ============================================================================
// Current User / Status
// ============================================================================

/// GET /api/session/me
pub async fn current_user<A>(
    State(state): State<AuthAppState<A>>,
    headers: HeaderMap,
) -> AuthResult<Json<UserProfile>>
where
    A: AccountService + Send + Sync + 'static,
{
    let access_token =
        extract_cookie(&headers, &state.config.access_cookie.name).and_then(AccessToken::new);

    let use_case = CurrentUserUseCase::new(state.accounts.clone());
    let profile = use_case.execute(access_token).await?;

    Ok(Json(profile))
}

/// GET /api/session/status
pub async fn session_status<A>(
    State(state): State<AuthAppState<A>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    A: AccountService + Send + Sync + 'static,
{
    Json(SessionStatusResponse {
        authenticated: extract_cookie(&headers, &state.config.access_cookie.name).is_some(),
        renewable: extract_cookie(&headers, &state.config.refresh_cookie.name).is_some(),
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Both session cookies plus the profile body
fn session_response(config: &AuthConfig, session: IssuedSession) -> AuthResult<Response> {
    let access = cookie_header(&config.access_cookie, session.access_token.as_str())?;
    let refresh = cookie_header(&config.refresh_cookie, session.refresh_token.as_str())?;

    Ok((
        StatusCode::OK,
        AppendHeaders([(header::SET_COOKIE, access), (header::SET_COOKIE, refresh)]),
        Json(SessionResponse {
            user: session.user,
            message: session.message,
        }),
    )
        .into_response())
}

fn cookie_header(cookie: &CookieConfig, value: &str) -> AuthResult<HeaderValue> {
    cookie.set_cookie_header(value).map_err(|_| {
        AuthError::InvalidResponse(format!("{} is not a valid cookie value", cookie.name))
    })
}
