//! Gateway Configuration
//!
//! Read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, anyhow, bail};
use auth::AuthConfig;
use auth::config::DEFAULT_PROTECTED_ROUTES;
use auth::models::RouteScope;
use axum::http::HeaderValue;
use platform::redirect::login_location;
use platform::upstream::normalize_base_url;

const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_STATIC_DIR: &str = "./out";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub auth: AuthConfig,
    pub bind_addr: SocketAddr,
    /// Exported frontend served for everything outside `/api`
    pub static_dir: PathBuf,
    pub frontend_origins: Vec<HeaderValue>,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset and blank values take the default
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = var("API_BASE_URL").context("API_BASE_URL must be set")?;
        let api_base_url = normalize_base_url(&api_base_url)?;

        let login_path = var("LOGIN_PATH").unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());
        if !login_path.starts_with('/') {
            bail!("LOGIN_PATH must start with '/': {login_path}");
        }
        HeaderValue::from_str(&login_location(&login_path, "/"))
            .with_context(|| format!("LOGIN_PATH is not usable in a Location header: {login_path:?}"))?;

        let routes = var("PROTECTED_ROUTES").unwrap_or_else(|| DEFAULT_PROTECTED_ROUTES.to_string());
        let protected_routes = RouteScope::parse_list(&routes)
            .map_err(|e| anyhow!("invalid PROTECTED_ROUTES: {e}"))?;

        let cookie_secure = match var("COOKIE_SECURE") {
            Some(v) => parse_bool(&v).with_context(|| format!("invalid COOKIE_SECURE: {v}"))?,
            None => !cfg!(debug_assertions),
        };

        let auth = AuthConfig::new(api_base_url)
            .map_err(|e| anyhow!("invalid auth config: {e}"))?
            .with_login_path(login_path)
            .with_protected_routes(protected_routes)
            .with_cookie_secure(cookie_secure);

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("invalid BIND_ADDR")?;

        let static_dir = PathBuf::from(
            var("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        );

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("invalid FRONTEND_ORIGINS entry: {origin:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            auth,
            bind_addr,
            static_dir,
            frontend_origins,
        })
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("expected true or false"),
    }
}
