//! Webhook service
//!
//! Handles events delivered by the Polka payment provider.

use tracing::{info, instrument};

use crate::dto::PolkaWebhookRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// The only Polka event this service acts on
const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// Webhook service
pub struct WebhookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WebhookService<'a> {
    /// Create a new WebhookService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Process a Polka webhook event
    ///
    /// Events other than `user.upgraded` are acknowledged without action.
    #[instrument(skip(self, request), fields(event = %request.event))]
    pub async fn handle_polka_event(&self, request: PolkaWebhookRequest) -> ServiceResult<()> {
        if request.event != USER_UPGRADED_EVENT {
            info!("Ignoring unhandled Polka event");
            return Ok(());
        }

        self.ctx
            .user_repo()
            .upgrade_to_chirpy_red(request.data.user_id)
            .await?;

        info!(user_id = %request.data.user_id, "User upgraded to Chirpy Red");
        Ok(())
    }
}
