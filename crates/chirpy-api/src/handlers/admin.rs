//! Admin handlers
//!
//! Operator endpoints for the hit counter and the dev-only reset.

use axum::{extract::State, response::Html};
use chirpy_service::{ServiceError, UserService};
use tracing::info;

use crate::response::ApiResult;
use crate::state::AppState;

/// Hit counter page
///
/// GET /admin/metrics
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    let hits = state.metrics().hits();
    Html(format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {hits} times!</p>\n  </body>\n</html>"
    ))
}

/// Zero the hit counter and delete all users
///
/// POST /admin/reset
///
/// Only available in the development environment; everywhere else the
/// endpoint answers 403 without touching anything.
pub async fn reset(State(state): State<AppState>) -> ApiResult<&'static str> {
    if !state.config().app.env.is_development() {
        return Err(
            ServiceError::permission_denied("reset is only allowed in the development environment")
                .into(),
        );
    }

    state.metrics().reset();

    let service = UserService::new(state.service_context());
    let removed = service.delete_all_users().await?;

    info!(removed, "Admin reset completed");
    Ok("OK")
}
