//! Chirp entity <-> model mapper

use chirpy_core::entities::Chirp;

use crate::models::ChirpModel;

/// Convert ChirpModel to Chirp entity
impl From<ChirpModel> for Chirp {
    fn from(model: ChirpModel) -> Self {
        Chirp {
            id: model.id,
            user_id: model.user_id,
            body: model.body,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
