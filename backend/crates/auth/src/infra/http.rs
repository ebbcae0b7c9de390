//! Blog API HTTP Client
//!
//! reqwest implementation of [`TokenRenewer`] and [`AccountService`].

use std::sync::Arc;

use reqwest::{Client, Response, header};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use platform::upstream::{self, UpstreamSetupError};

use crate::application::config::AuthConfig;
use crate::domain::entity::{IssuedSession, UserProfile};
use crate::domain::remote::{AccountService, PasswordReset, Registration, TokenRenewer};
use crate::domain::renewal::RenewalOutcome;
use crate::domain::value_object::{AccessToken, Email, Password, RefreshToken};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Endpoints
// ============================================================================

const REFRESH_PATH: &str = "/auth/refresh";
const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";
const RESET_PASSWORD_PATH: &str = "/auth/reset-password";
const CURRENT_USER_PATH: &str = "/users/me";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a RefreshToken,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access_token: AccessToken,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a Email,
    password: &'a Password,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a Email,
    password: &'a Password,
    username: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<&'a str>,
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a Email,
}

#[derive(Serialize)]
struct ResetPasswordRequest<'a> {
    new_password: &'a Password,
    access_token: &'a AccessToken,
    refresh_token: &'a RefreshToken,
}

#[derive(Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// Blog API client
///
/// Clone is cheap: the reqwest client shares its connection pool.
#[derive(Clone)]
pub struct HttpAuthApi {
    client: Client,
    config: Arc<AuthConfig>,
}

impl HttpAuthApi {
    pub fn new(config: Arc<AuthConfig>) -> Result<Self, UpstreamSetupError> {
        Ok(Self::with_client(upstream::build_client()?, config))
    }

    /// Use an existing client (shared pool, custom settings)
    pub fn with_client(client: Client, config: Arc<AuthConfig>) -> Self {
        Self { client, config }
    }

    /// Map a non-success response to [`AuthError::Upstream`]
    async fn check_response(response: Response) -> AuthResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = upstream::extract_detail(&body);
        tracing::debug!(
            status = status.as_u16(),
            body = %upstream::truncate_body(&body),
            "Auth API error response"
        );

        Err(AuthError::Upstream {
            status: status.as_u16(),
            detail,
        })
    }

    async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> AuthResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| AuthError::InvalidResponse(format!("{what}: {e}")))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, what: &str) -> AuthResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.config.api_url(path))
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        Self::read_json(response, what).await
    }
}

impl TokenRenewer for HttpAuthApi {
    async fn renew(&self, refresh_token: &RefreshToken) -> RenewalOutcome {
        let sent = self
            .client
            .post(self.config.api_url(REFRESH_PATH))
            .header(header::ACCEPT, "application/json")
            .json(&RefreshRequest { refresh_token })
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) => return RenewalOutcome::TransportFailure(e.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return RenewalOutcome::Rejected {
                status: status.as_u16(),
                detail: upstream::extract_detail(&body),
            };
        }

        match response.json::<RefreshResponse>().await {
            Ok(body) => RenewalOutcome::Renewed(body.access_token),
            Err(e) => RenewalOutcome::TransportFailure(format!("malformed refresh response: {e}")),
        }
    }
}

impl AccountService for HttpAuthApi {
    async fn login(&self, email: &Email, password: &Password) -> AuthResult<IssuedSession> {
        self.post_json(LOGIN_PATH, &LoginRequest { email, password }, "login response")
            .await
    }

    async fn register(&self, registration: &Registration) -> AuthResult<IssuedSession> {
        let body = RegisterRequest {
            email: &registration.email,
            password: &registration.password,
            username: registration.username.as_str(),
            first_name: registration.first_name.as_deref(),
            last_name: registration.last_name.as_deref(),
        };
        self.post_json(REGISTER_PATH, &body, "register response")
            .await
    }

    async fn forgot_password(&self, email: &Email) -> AuthResult<Option<String>> {
        let body: MessageResponse = self
            .post_json(
                FORGOT_PASSWORD_PATH,
                &ForgotPasswordRequest { email },
                "forgot-password response",
            )
            .await?;
        Ok(body.message)
    }

    async fn reset_password(&self, reset: &PasswordReset) -> AuthResult<Option<String>> {
        let body = ResetPasswordRequest {
            new_password: &reset.new_password,
            access_token: &reset.access_token,
            refresh_token: &reset.refresh_token,
        };
        let body: MessageResponse = self
            .post_json(RESET_PASSWORD_PATH, &body, "reset-password response")
            .await?;
        Ok(body.message)
    }

    async fn current_user(&self, access_token: &AccessToken) -> AuthResult<UserProfile> {
        let response = self
            .client
            .get(self.config.api_url(CURRENT_USER_PATH))
            .header(header::ACCEPT, "application/json")
            .bearer_auth(access_token.as_str())
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        Self::read_json(response, "profile response").await
    }
}
