//! Issued Session Entity
//!
//! What the blog API hands back after a successful login or registration.

use serde::Deserialize;

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::value_object::{AccessToken, RefreshToken};

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Credentials plus the profile they belong to
#[derive(Debug, Clone, Deserialize)]
pub struct IssuedSession {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: UserProfile,
    /// e.g. "check your inbox to verify your email"
    #[serde(default)]
    pub message: Option<String>,
}
