//! Session Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::remote::AccountService;
use crate::infra::http::HttpAuthApi;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the session router backed by the blog API
pub fn session_router(api: HttpAuthApi, config: Arc<AuthConfig>) -> Router {
    session_router_generic(api, config)
}

/// Create a session router for any account service implementation
pub fn session_router_generic<A>(accounts: A, config: Arc<AuthConfig>) -> Router
where
    A: AccountService + Send + Sync + 'static,
{
    let state = AuthAppState {
        accounts: Arc::new(accounts),
        config,
    };

    Router::new()
        .route("/login", post(handlers::login::<A>))
        .route("/register", post(handlers::register::<A>))
        .route("/logout", post(handlers::logout::<A>))
        .route("/forgot-password", post(handlers::forgot_password::<A>))
        .route("/reset-password", post(handlers::reset_password::<A>))
        .route("/me", get(handlers::current_user::<A>))
        .route("/status", get(handlers::session_status::<A>))
        .with_state(state)
}
