//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at process
//! start and shared behind an `Arc`; nothing here is read per request.

use std::time::Duration;

use kernel::error::app_error::AppResult;
use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::value_object::RouteScope;

/// Cookie holding the short-lived credential
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
/// Cookie holding the long-lived credential
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Routes guarded when nothing else is configured
pub const DEFAULT_PROTECTED_ROUTES: &str = "/dashboard/:path*,/profile/:path*";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Blog API base URL, without trailing slash
    pub api_base_url: String,
    /// Interactive login page
    pub login_path: String,
    /// Paths the session guard runs for
    pub protected_routes: RouteScope,
    /// Access token cookie (browser-session lifetime)
    pub access_cookie: CookieConfig,
    /// Refresh token cookie
    pub refresh_cookie: CookieConfig,
}

/// Refresh tokens are valid for 7 days upstream
const REFRESH_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

impl AuthConfig {
    /// Production defaults for the given API
    pub fn new(api_base_url: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            api_base_url: api_base_url.into(),
            login_path: "/login".to_string(),
            protected_routes: RouteScope::parse_list(DEFAULT_PROTECTED_ROUTES)?,
            access_cookie: CookieConfig::site_wide(ACCESS_TOKEN_COOKIE),
            refresh_cookie: CookieConfig::site_wide(REFRESH_TOKEN_COOKIE)
                .with_max_age(REFRESH_TOKEN_TTL.as_secs() as i64),
        })
    }

    /// Create config for development (insecure cookie)
    pub fn development(api_base_url: impl Into<String>) -> AppResult<Self> {
        Ok(Self::new(api_base_url)?.with_cookie_secure(false))
    }

    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    pub fn with_protected_routes(mut self, routes: RouteScope) -> Self {
        self.protected_routes = routes;
        self
    }

    /// Toggle `Secure` on both session cookies
    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.access_cookie = self.access_cookie.with_secure(secure);
        self.refresh_cookie = self.refresh_cookie.with_secure(secure);
        self
    }

    /// Full URL of an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
