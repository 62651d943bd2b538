//! Settings handlers.

use axum::{extract::State, Json};

use crate::pages::settings::{self, SettingsUpdate, SettingsView};
use crate::server::error::ApiError;
use crate::server::extract::SessionId;
use crate::server::state::AppState;

/// GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Json<SettingsView> {
    let session = state.session(&session_id).await;
    Json(settings::build(&session))
}

/// POST /api/settings
pub async fn update_settings(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(update): Json<SettingsUpdate>,
) -> Result<Json<SettingsView>, ApiError> {
    state
        .with_session(&session_id, |session| settings::update(session, update))
        .await
        .map(Json)
        .map_err(ApiError::BadRequest)
}
