//! Password Reset Use Cases
//!
//! Requesting a reset email, and setting the new password from the link.

use std::sync::Arc;

use kernel::error::app_error::AppError;

use crate::domain::remote::{AccountService, PasswordReset};
use crate::domain::value_object::{AccessToken, Email, Password, RefreshToken};
use crate::error::AuthResult;

/// Reset input, as carried by the reset link and form
pub struct ResetPasswordInput {
    pub new_password: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Password reset use case
pub struct PasswordResetUseCase<A>
where
    A: AccountService,
{
    accounts: Arc<A>,
}

impl<A> PasswordResetUseCase<A>
where
    A: AccountService,
{
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    /// Ask for a reset link
    pub async fn request(&self, email: String) -> AuthResult<Option<String>> {
        let email = Email::new(email)?;
        let message = self.accounts.forgot_password(&email).await?;

        // The address is not logged: this endpoint is open to anyone
        tracing::info!(domain = %email.domain(), "Password reset requested");
        Ok(message)
    }

    /// Set the new password
    pub async fn reset(&self, input: ResetPasswordInput) -> AuthResult<Option<String>> {
        let reset = PasswordReset {
            new_password: Password::new(input.new_password)?,
            access_token: AccessToken::new(input.access_token).ok_or_else(|| {
                AppError::bad_request("Reset link is missing its access token")
                    .with_action("Open the link from the reset email again")
            })?,
            refresh_token: RefreshToken::new(input.refresh_token).ok_or_else(|| {
                AppError::bad_request("Reset link is missing its refresh token")
                    .with_action("Open the link from the reset email again")
            })?,
        };

        let message = self.accounts.reset_password(&reset).await?;

        tracing::info!("Password reset completed");
        Ok(message)
    }
}
