//! Refresh token entity - opaque long-lived session credential

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use uuid::Uuid;

/// Number of random bytes per token; hex encoding doubles this on the wire
const REFRESH_TOKEN_BYTES: usize = 32;

/// Default refresh token lifetime in days
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 60;

/// Opaque refresh token bound to a user session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Issue a new token for the user with the default lifetime
    pub fn issue(user_id: Uuid) -> Self {
        Self::issue_with_ttl(user_id, Duration::days(REFRESH_TOKEN_TTL_DAYS))
    }

    /// Issue a new token for the user with an explicit lifetime
    pub fn issue_with_ttl(user_id: Uuid, ttl: Duration) -> Self {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);

        let now = Utc::now();
        Self {
            token: hex::encode(bytes),
            user_id,
            created_at: now,
            updated_at: now,
            expires_at: now + ttl,
            revoked_at: None,
        }
    }

    /// Check if the token has been revoked
    #[inline]
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Check if the token has expired
    ///
    /// Closed boundary: the token is usable only while `expires_at` lies in
    /// the future.
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Check if the token is still usable (not revoked and not expired)
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_revoked() && !self.is_expired()
    }

    /// Revoke the token
    pub fn revoke(&mut self) {
        let now = Utc::now();
        self.revoked_at = Some(now);
        self.updated_at = now;
    }
}
