//! Route Pattern Value Objects
//!
//! Decides which request paths the session guard runs for.
//!
//! Patterns use the frontend router's matcher syntax:
//! - `/dashboard/:path*` matches `/dashboard` and every path below it
//! - `/dashboard/*` is accepted as the same thing
//! - `/about` (no wildcard) matches exactly `/about`

use std::fmt;
use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};

/// A single matcher entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Exact path
    Exact(String),
    /// Path and all sub-paths (segment-aligned)
    Prefix(String),
}

impl RoutePattern {
    pub fn new(pattern: &str) -> AppResult<Self> {
        let pattern = pattern.trim();

        if !pattern.starts_with('/') {
            return Err(AppError::bad_request(format!(
                "Route pattern must start with '/': {pattern:?}"
            )));
        }

        let (base, wildcard) = if let Some(base) = pattern.strip_suffix("/:path*") {
            (base, true)
        } else if let Some(base) = pattern.strip_suffix("/*") {
            (base, true)
        } else {
            (pattern, false)
        };

        if base.contains('*') || base.contains(':') {
            return Err(AppError::bad_request(format!(
                "Wildcards are only allowed as the last segment: {pattern:?}"
            )));
        }

        // "/" + wildcard covers every path
        let base = if base.is_empty() { "/" } else { base };
        let base = if base.len() > 1 {
            base.trim_end_matches('/')
        } else {
            base
        };

        if wildcard {
            Ok(RoutePattern::Prefix(base.to_string()))
        } else {
            Ok(RoutePattern::Exact(base.to_string()))
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            RoutePattern::Exact(exact) => path == exact,
            RoutePattern::Prefix(prefix) if prefix == "/" => path.starts_with('/'),
            RoutePattern::Prefix(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
        }
    }
}

impl FromStr for RoutePattern {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        RoutePattern::new(s)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutePattern::Exact(path) => write!(f, "{path}"),
            RoutePattern::Prefix(path) if path == "/" => write!(f, "/:path*"),
            RoutePattern::Prefix(path) => write!(f, "{path}/:path*"),
        }
    }
}

/// The set of patterns a guard is responsible for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteScope {
    patterns: Vec<RoutePattern>,
}

impl RouteScope {
    pub fn new(patterns: Vec<RoutePattern>) -> Self {
        Self { patterns }
    }

    /// Parse a comma-separated list, ignoring blank entries
    pub fn parse_list(list: &str) -> AppResult<Self> {
        let patterns = list
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(RoutePattern::new)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }

    pub fn patterns(&self) -> &[RoutePattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
