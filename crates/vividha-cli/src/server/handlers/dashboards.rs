//! Responsible Tourism handlers.

use axum::{extract::State, Json};

use crate::pages::dashboards::{self, DashboardsView};
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// GET /api/dashboards
pub async fn get_dashboards(
    State(state): State<AppState>,
) -> Result<Json<DashboardsView>, ApiError> {
    let view = dashboards::build(state.source.as_ref())?;
    Ok(Json(view))
}
