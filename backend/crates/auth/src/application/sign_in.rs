//! Sign In Use Case
//!
//! Validates the login form and exchanges it for a session at the API.

use std::sync::Arc;

use crate::domain::entity::IssuedSession;
use crate::domain::remote::AccountService;
use crate::domain::value_object::{Email, Password};
use crate::error::AuthResult;

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<A>
where
    A: AccountService,
{
    accounts: Arc<A>,
}

impl<A> SignInUseCase<A>
where
    A: AccountService,
{
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<IssuedSession> {
        let email = Email::new(input.email)?;
        let password = Password::new(input.password)?;

        let session = self.accounts.login(&email, &password).await?;

        tracing::info!(user_id = %session.user.user_id, "User signed in");
        Ok(session)
    }
}
