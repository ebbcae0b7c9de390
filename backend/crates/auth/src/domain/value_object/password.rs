//! Password Value Object
//!
//! Passwords are forwarded to the blog API untouched. The only local rule
//! is that one was supplied; strength policy lives with the API.

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> AppResult<Self> {
        let password = password.into();
        if password.is_empty() {
            return Err(AppError::bad_request("Password cannot be empty"));
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
