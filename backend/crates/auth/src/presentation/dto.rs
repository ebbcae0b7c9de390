//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the blog API's snake_case so the frontend forms post
//! the same shapes they always have.

use serde::{Deserialize, Serialize};

use crate::domain::entity::UserProfile;

// ============================================================================
// Login / Register
// ============================================================================

/// Login form
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration form
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Response to a login or registration; tokens travel in cookies only
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user: UserProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============================================================================
// Password Reset
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Session Status
// ============================================================================

/// Cookie-only view of the session; nothing is verified upstream
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusResponse {
    /// An access token cookie is present
    pub authenticated: bool,
    /// A refresh token cookie is present
    pub renewable: bool,
}
