//! Refresh token entity <-> model mapper

use chirpy_core::entities::RefreshToken;

use crate::models::RefreshTokenModel;

/// Convert RefreshTokenModel to RefreshToken entity
impl From<RefreshTokenModel> for RefreshToken {
    fn from(model: RefreshTokenModel) -> Self {
        RefreshToken {
            token: model.token,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            expires_at: model.expires_at,
            revoked_at: model.revoked_at,
        }
    }
}
