//! Preservation Hub handlers.

use axum::{extract::State, Json};

use vividha::ArtifactSubmission;

use crate::pages::preservation::{self, PreservationView, SubmissionForm};
use crate::server::error::ApiError;
use crate::server::extract::SessionId;
use crate::server::state::AppState;

/// GET /api/preservation
pub async fn get_preservation(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<Json<PreservationView>, ApiError> {
    let session = state.session(&session_id).await;
    let registry = state.registry.lock().await;
    let view = preservation::build(state.source.as_ref(), &registry, &session)?;
    Ok(Json(view))
}

/// POST /api/preservation/artifacts
pub async fn submit_artifact(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(form): Json<SubmissionForm>,
) -> Result<Json<ArtifactSubmission>, ApiError> {
    form.validate().map_err(ApiError::BadRequest)?;

    // Registry lock held across the append keeps writers serialized
    let registry = state.registry.lock().await;
    let submission = state
        .with_session(&session_id, |session| {
            preservation::submit(&registry, session, form)
        })
        .await?;
    Ok(Json(submission))
}
