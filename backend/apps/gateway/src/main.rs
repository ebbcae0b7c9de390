//! Gateway Server Entry Point
//!
//! Serves the exported frontend behind the session guard and exposes the
//! session endpoints under `/api/session`.
//! Uses `anyhow` for startup errors; request-level errors go through
//! `kernel::error::AppError`.

mod config;

use std::sync::Arc;

use auth::{HttpAuthApi, SessionGuardState, require_session, session_router};
use axum::{
    Router,
    http::{Method, header},
    middleware::from_fn_with_state,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::GatewayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env()?;

    tracing::info!(
        api_base_url = %config.auth.api_base_url,
        login_path = %config.auth.login_path,
        protected_routes = config.auth.protected_routes.patterns().len(),
        cookie_secure = config.auth.access_cookie.secure,
        static_dir = %config.static_dir.display(),
        "Gateway configured"
    );

    let app = build_app(&config)?;

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_app(config: &GatewayConfig) -> anyhow::Result<Router> {
    let auth_config = Arc::new(config.auth.clone());
    let api = HttpAuthApi::new(auth_config.clone())?;

    let guard = SessionGuardState::new(Arc::new(api.clone()), auth_config.clone());

    let frontend = ServeDir::new(&config.static_dir)
        .not_found_service(ServeFile::new(config.static_dir.join("404.html")));

    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origins.clone())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    Ok(Router::new()
        .nest("/api/session", session_router(api, auth_config))
        .fallback_service(frontend)
        .layer(from_fn_with_state(guard, require_session::<HttpAuthApi>))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
