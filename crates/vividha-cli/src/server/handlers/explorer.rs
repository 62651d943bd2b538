//! Art Explorer handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::pages::explorer::{self, ExplorerView};
use crate::server::error::ApiError;
use crate::server::extract::SessionId;
use crate::server::state::AppState;

#[derive(Deserialize)]
pub struct ExplorerQuery {
    /// Art form to show; omitted means the session's last selection.
    pub art: Option<String>,
}

/// GET /api/explorer
pub async fn get_explorer(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Query(query): Query<ExplorerQuery>,
) -> Result<Json<ExplorerView>, ApiError> {
    let source = state.source.clone();
    let view = state
        .with_session(&session_id, |session| {
            explorer::build(source.as_ref(), session, query.art.as_deref())
        })
        .await?;
    Ok(Json(view))
}

#[derive(Deserialize)]
pub struct SelectRequest {
    pub art: String,
}

/// POST /api/explorer/select
pub async fn select_art(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(req): Json<SelectRequest>,
) -> Result<Json<ExplorerView>, ApiError> {
    let source = state.source.clone();
    let view = state
        .with_session(&session_id, |session| {
            explorer::build(source.as_ref(), session, Some(&req.art))
        })
        .await?;
    Ok(Json(view))
}
