//! Sign Up Use Case
//!
//! Validates the registration form and creates the account at the API.

use std::sync::Arc;

use crate::domain::entity::IssuedSession;
use crate::domain::remote::{AccountService, Registration};
use crate::domain::value_object::{Email, Password, UserName};
use crate::error::AuthResult;

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Sign up use case
pub struct SignUpUseCase<A>
where
    A: AccountService,
{
    accounts: Arc<A>,
}

impl<A> SignUpUseCase<A>
where
    A: AccountService,
{
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<IssuedSession> {
        let registration = Registration {
            email: Email::new(input.email)?,
            password: Password::new(input.password)?,
            username: UserName::new(input.username)?,
            first_name: non_blank(input.first_name),
            last_name: non_blank(input.last_name),
        };

        let session = self.accounts.register(&registration).await?;

        tracing::info!(user_id = %session.user.user_id, "User registered");
        Ok(session)
    }
}

/// Optional form fields arrive as "" when left empty
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" Ada ".into())), Some("Ada".into()));
    }
}
