//! Navigation handler.

use axum::Json;
use serde::Serialize;

use crate::pages::PAGES;

/// One sidebar entry.
#[derive(Serialize)]
pub struct PageInfo {
    pub slug: String,
    pub title: String,
}

/// GET /api/pages
pub async fn list_pages() -> Json<Vec<PageInfo>> {
    Json(
        PAGES
            .iter()
            .map(|(slug, title)| PageInfo {
                slug: slug.to_string(),
                title: title.to_string(),
            })
            .collect(),
    )
}
