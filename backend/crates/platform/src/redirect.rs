//! Login redirect construction
//!
//! Builds the `Location` for sending a browser to the interactive login
//! page while remembering where it was headed.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use url::form_urlencoded;

/// Query parameter carrying the return path
pub const NEXT_PARAM: &str = "next";

/// `<login_path>?next=<encoded return_path>`
pub fn login_location(login_path: &str, return_path: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(NEXT_PARAM, return_path)
        .finish();

    let separator = if login_path.contains('?') { '&' } else { '?' };
    format!("{login_path}{separator}{query}")
}

/// `307 Temporary Redirect` to the login page
///
/// The request method is preserved, so a guarded form POST is replayed
/// against the login page rather than silently turned into a GET.
pub fn login_redirect(login_path: &str, return_path: &str) -> Response {
    temporary_redirect(&login_location(login_path, return_path))
}

/// `307 Temporary Redirect` to `location`
pub fn temporary_redirect(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, value)]).into_response(),
        // form_urlencoded only emits header-safe bytes; the gateway rejects a
        // login_path that cannot form a Location header before serving.
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_location_encodes_path() {
        assert_eq!(
            login_location("/login", "/dashboard/posts"),
            "/login?next=%2Fdashboard%2Fposts"
        );
        assert_eq!(
            login_location("/login", "/profile/a b"),
            "/login?next=%2Fprofile%2Fa+b"
        );
    }

    #[test]
    fn test_login_location_appends_to_existing_query() {
        assert_eq!(
            login_location("/login?mode=signin", "/dashboard"),
            "/login?mode=signin&next=%2Fdashboard"
        );
    }

    #[test]
    fn test_login_redirect_response() {
        let response = login_redirect("/login", "/dashboard");
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/login?next=%2Fdashboard"
        );
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
