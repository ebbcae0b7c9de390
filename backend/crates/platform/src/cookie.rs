//! Cookie Management Infrastructure
//!
//! Reading request cookies and building `Set-Cookie` values for the
//! session credentials.

use axum::http::{HeaderMap, HeaderValue, header};

/// A value that cannot be written into a `Set-Cookie` header
#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    #[error("cookie value contains characters outside the cookie-octet set")]
    InvalidValue,

    #[error(transparent)]
    Header(#[from] http::header::InvalidHeaderValue),
}

/// RFC 6265 `cookie-octet`
///
/// Excludes controls, whitespace, `"`, `,`, `;` and `\`, so a value can
/// never introduce attributes of its own.
pub fn is_cookie_value(value: &str) -> bool {
    value
        .bytes()
        .all(|b| matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E))
}

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    #[default]
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes of one named cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    /// `None` makes a browser-session cookie
    pub max_age_secs: Option<i64>,
}

impl CookieConfig {
    /// Site-wide, secure, strict cookie with no expiry
    pub fn site_wide(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secure: true,
            http_only: false,
            same_site: SameSite::Strict,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }

    pub fn with_max_age(mut self, secs: i64) -> Self {
        self.max_age_secs = Some(secs);
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Build Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!("{}={}", self.name, value);

        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.path));

        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }

        cookie
    }

    /// Build Set-Cookie header for deletion (expired)
    ///
    /// Keeps `Secure`/`SameSite` so the browser matches the original cookie.
    pub fn build_delete_cookie(&self) -> String {
        let mut cookie = format!("{}=", self.name);
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str(&format!(
            "; Path={}; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
            self.path
        ));
        cookie
    }

    /// `Set-Cookie` header value for `value`
    ///
    /// Fails unless every byte of `value` is a cookie-octet.
    pub fn set_cookie_header(&self, value: &str) -> Result<HeaderValue, CookieError> {
        if !is_cookie_value(value) {
            return Err(CookieError::InvalidValue);
        }
        Ok(HeaderValue::from_str(&self.build_set_cookie(value))?)
    }

    /// `Set-Cookie` header value that deletes the cookie
    pub fn delete_cookie_header(&self) -> Result<HeaderValue, CookieError> {
        Ok(HeaderValue::from_str(&self.build_delete_cookie())?)
    }
}

/// Extract a cookie value from headers
///
/// Looks through every `Cookie` header (HTTP/2 clients may split them).
/// An empty value counts as absent.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name && !value.is_empty() {
                Some(value.to_string())
            } else {
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_wide_cookie() {
        let config = CookieConfig::site_wide("access_token");

        let cookie = config.build_set_cookie("abc");
        assert_eq!(cookie, "access_token=abc; Secure; SameSite=Strict; Path=/");
    }

    #[test]
    fn test_cookie_config_build() {
        let config = CookieConfig {
            name: "test".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/api".to_string(),
            max_age_secs: Some(3600),
        };

        let cookie = config.build_set_cookie("value123");
        assert!(cookie.contains("test=value123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/api"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn test_insecure_cookie_has_no_secure_flag() {
        let cookie = CookieConfig::site_wide("refresh_token")
            .with_secure(false)
            .with_max_age(60)
            .build_set_cookie("r");
        assert!(!cookie.contains("Secure"));
        assert!(cookie.ends_with("Max-Age=60"));
    }

    #[test]
    fn test_delete_cookie() {
        let cookie = CookieConfig::site_wide("access_token").build_delete_cookie();
        assert!(cookie.starts_with("access_token=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("Path=/"));
    }

    #[test]
    fn test_header_rejects_control_characters() {
        let config = CookieConfig::site_wide("access_token");
        assert!(config.set_cookie_header("ok").is_ok());
        assert!(config.set_cookie_header("bad\nvalue").is_err());
    }

    #[test]
    fn test_header_rejects_attribute_injection() {
        let config = CookieConfig::site_wide("access_token");

        for value in [
            "T; Domain=evil.example; Max-Age=99999999",
            "a,b",
            "with space",
            "\"quoted\"",
            "back\\slash",
        ] {
            assert!(
                matches!(config.set_cookie_header(value), Err(CookieError::InvalidValue)),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_jwt_shaped_values_are_cookie_values() {
        assert!(is_cookie_value("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxIn0.c2ln-_="));
        assert!(!is_cookie_value("T;x"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; session=abc123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "session"),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_across_headers_and_empty_values() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("access_token="));
        headers.append(header::COOKIE, HeaderValue::from_static("refresh_token=r1"));

        assert_eq!(extract_cookie(&headers, "access_token"), None);
        assert_eq!(
            extract_cookie(&headers, "refresh_token"),
            Some("r1".to_string())
        );
    }
}
