//! User Name Value Object
//!
//! Handle chosen at registration. The profile table stores up to 100
//! characters; uniqueness is enforced by the blog API.

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;

const USER_NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Username cannot be empty"));
        }
        if name.chars().count() > USER_NAME_MAX_CHARS {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USER_NAME_MAX_CHARS
            )));
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AppError::bad_request("Username cannot contain spaces"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name() {
        assert_eq!(UserName::new(" writer_01 ").unwrap().as_str(), "writer_01");
        assert!(UserName::new("").is_err());
        assert!(UserName::new("two words").is_err());
        assert!(UserName::new("a".repeat(101)).is_err());
        assert!(UserName::new("é".repeat(100)).is_ok());
    }
}
