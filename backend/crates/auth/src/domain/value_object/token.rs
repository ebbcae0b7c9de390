//! Session Credential Value Objects
//!
//! Both credentials are opaque bearer strings issued by the blog API.
//! Nothing here parses or decodes them; validity is only ever judged by
//! the API's response status.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opaque_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw value; empty strings are not credentials
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                if value.is_empty() {
                    None
                } else {
                    Some(Self(value))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = &'static str;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value).ok_or(concat!(stringify!($name), " cannot be empty"))
            }
        }

        impl From<$name> for String {
            fn from(token: $name) -> String {
                token.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "(<redacted>)"))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_token!(
    /// Short-lived credential proving identity to the API
    AccessToken
);

opaque_token!(
    /// Long-lived credential exchangeable for a new [`AccessToken`]
    RefreshToken
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_not_a_token() {
        assert!(AccessToken::new("").is_none());
        assert!(RefreshToken::new(String::new()).is_none());
    }

    #[test]
    fn test_value_is_kept_verbatim() {
        let token = AccessToken::new("eyJhbGciOi.not.decoded").unwrap();
        assert_eq!(token.as_str(), "eyJhbGciOi.not.decoded");
        assert_eq!(String::from(token), "eyJhbGciOi.not.decoded");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = RefreshToken::new("super-secret").unwrap();
        let debug = format!("{:?}", token);
        assert_eq!(debug, "RefreshToken(<redacted>)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let token: AccessToken = serde_json::from_str(r#""T""#).unwrap();
        assert_eq!(token.as_str(), "T");
        assert_eq!(serde_json::to_string(&token).unwrap(), r#""T""#);
    }

    #[test]
    fn test_empty_value_does_not_deserialize() {
        assert!(serde_json::from_str::<AccessToken>(r#""""#).is_err());
        assert!(serde_json::from_str::<RefreshToken>(r#""""#).is_err());
    }
}
