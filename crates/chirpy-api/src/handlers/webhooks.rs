//! Webhook handlers
//!
//! Inbound events from the Polka payment provider.

use axum::{extract::State, Json};
use chirpy_service::dto::PolkaWebhookRequest;
use chirpy_service::WebhookService;

use crate::extractors::PolkaApiKey;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Handle a Polka webhook event
///
/// POST /api/polka/webhooks
pub async fn polka_webhook(
    State(state): State<AppState>,
    _key: PolkaApiKey,
    Json(request): Json<PolkaWebhookRequest>,
) -> ApiResult<NoContent> {
    let service = WebhookService::new(state.service_context());
    service.handle_polka_event(request).await?;
    Ok(NoContent)
}
