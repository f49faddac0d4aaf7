//! Route definitions
//!
//! The public API under /api, the admin surface under /admin, and the
//! static welcome site under /app.

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{admin, auth, chirps, health, users, webhooks};
use crate::middleware::track_hits;
use crate::state::AppState;

/// Directory served under /app, resolved relative to the working directory
const STATIC_SITE_DIR: &str = "static";

/// Create the main router with all routes
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(api_routes())
        .merge(admin_routes())
        .merge(app_routes(state.clone()))
}

/// Public API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/healthz", get(health::healthz))
        // Users
        .route("/api/users", post(users::create_user))
        .route("/api/users", put(users::update_user))
        // Sessions
        .route("/api/login", post(auth::login))
        .route("/api/refresh", post(auth::refresh))
        .route("/api/revoke", post(auth::revoke))
        // Chirps
        .route("/api/chirps", post(chirps::create_chirp))
        .route("/api/chirps", get(chirps::list_chirps))
        .route("/api/chirps/:chirp_id", get(chirps::get_chirp))
        .route("/api/chirps/:chirp_id", delete(chirps::delete_chirp))
        // Payment provider webhooks
        .route("/api/polka/webhooks", post(webhooks::polka_webhook))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/metrics", get(admin::metrics))
        .route("/admin/reset", post(admin::reset))
}

/// Static welcome site, with every hit counted
fn app_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest_service("/app", ServeDir::new(STATIC_SITE_DIR))
        .layer(middleware::from_fn_with_state(state, track_hits))
}
