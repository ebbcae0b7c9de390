//! Current User Use Case

use std::sync::Arc;

use crate::domain::entity::UserProfile;
use crate::domain::remote::AccountService;
use crate::domain::value_object::AccessToken;
use crate::error::{AuthError, AuthResult};

pub struct CurrentUserUseCase<A>
where
    A: AccountService,
{
    accounts: Arc<A>,
}

impl<A> CurrentUserUseCase<A>
where
    A: AccountService,
{
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    /// Profile for the access token cookie, if any
    pub async fn execute(&self, access_token: Option<AccessToken>) -> AuthResult<UserProfile> {
        let access_token = access_token.ok_or(AuthError::NotSignedIn)?;
        self.accounts.current_user(&access_token).await
    }
}
