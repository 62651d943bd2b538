//! Cultural Experiences handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use vividha::filter::VISIBILITY_COLUMN;
use vividha::{FilterSpec, RangeFilter};

use crate::pages::experiences::{self, ExperiencesView};
use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ExperiencesQuery {
    /// Category label; "All" and absent both mean unconstrained.
    pub category: Option<String>,
    /// Comma-separated region list.
    pub regions: Option<String>,
    pub min_visibility: Option<f64>,
    pub max_visibility: Option<f64>,
}

impl ExperiencesQuery {
    fn into_spec(self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        spec.category = self.category.filter(|c| c != "All" && !c.is_empty());
        if let Some(regions) = self.regions {
            spec.regions = regions
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string)
                .collect();
        }
        if self.min_visibility.is_some() || self.max_visibility.is_some() {
            spec.range = Some(RangeFilter::new(
                VISIBILITY_COLUMN,
                self.min_visibility.unwrap_or(0.0),
                self.max_visibility.unwrap_or(100.0),
            ));
        }
        spec
    }
}

/// GET /api/experiences
pub async fn get_experiences(
    State(state): State<AppState>,
    Query(query): Query<ExperiencesQuery>,
) -> Result<Json<ExperiencesView>, ApiError> {
    let view = experiences::build(state.source.as_ref(), &query.into_spec())?;
    Ok(Json(view))
}
