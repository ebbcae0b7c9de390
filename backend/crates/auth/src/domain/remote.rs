//! Remote Service Traits
//!
//! Interfaces to the blog API. Implementation is in infrastructure layer.

use crate::domain::entity::{IssuedSession, UserProfile};
use crate::domain::renewal::RenewalOutcome;
use crate::domain::value_object::{
    AccessToken, Email, Password, RefreshToken, UserName,
};
use crate::error::AuthResult;

/// Exchanges refresh tokens for access tokens
#[trait_variant::make(TokenRenewer: Send)]
pub trait LocalTokenRenewer {
    /// Make exactly one renewal call; never retries
    async fn renew(&self, refresh_token: &RefreshToken) -> RenewalOutcome;
}

/// Registration form contents
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: Email,
    pub password: Password,
    pub username: UserName,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Password reset form contents
///
/// The reset link lands the user with a token pair in the URL; both are
/// sent back alongside the new password.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    pub new_password: Password,
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
}

/// Account operations the frontend forms submit
#[trait_variant::make(AccountService: Send)]
pub trait LocalAccountService {
    /// Exchange email + password for a session
    async fn login(&self, email: &Email, password: &Password) -> AuthResult<IssuedSession>;

    /// Create an account and its first session
    async fn register(&self, registration: &Registration) -> AuthResult<IssuedSession>;

    /// Ask the API to email a reset link; returns the API's message
    async fn forgot_password(&self, email: &Email) -> AuthResult<Option<String>>;

    /// Set a new password; returns the API's message
    async fn reset_password(&self, reset: &PasswordReset) -> AuthResult<Option<String>>;

    /// Profile of the user the access token belongs to
    async fn current_user(&self, access_token: &AccessToken) -> AuthResult<UserProfile>;
}
