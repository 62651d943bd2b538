//! Cultural Experiences page: filterable map of cultural sites.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use vividha::filter::{CATEGORY_COLUMN, REGION_COLUMN};
use vividha::{CulturalRecord, DataSource, Dataset, FilterSpec, Result};

/// Approximate centroid per region.
static REGION_COORDS: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    HashMap::from([
        ("Bihar", (25.6, 85.1)),
        ("Maharashtra", (19.7, 75.7)),
        ("Odisha", (20.9, 85.1)),
        ("Madhya Pradesh", (23.5, 78.5)),
        ("Andhra Pradesh", (15.9, 79.7)),
        ("Kerala", (10.8, 76.3)),
        ("Tamil Nadu", (11.1, 78.7)),
        ("Rajasthan", (27.0, 74.2)),
        ("Telangana", (17.9, 79.6)),
        ("West Bengal", (22.9, 87.8)),
        ("Karnataka", (15.3, 75.7)),
        ("Manipur", (24.8, 93.9)),
        ("Assam", (26.2, 92.9)),
        ("Himachal Pradesh", (31.1, 77.2)),
        ("Gujarat", (22.3, 71.7)),
    ])
});

/// Country centroid used for regions without coordinates.
const FALLBACK_COORDS: (f64, f64) = (20.6, 78.9);

#[derive(Debug, Serialize)]
pub struct ExperiencesView {
    /// Category labels available for filtering, sorted.
    pub categories: Vec<String>,
    /// Region labels available for filtering, sorted.
    pub regions: Vec<String>,
    /// Filtered map points.
    pub points: Vec<MapPoint>,
    /// Filtered detail rows, in dataset order.
    pub rows: Vec<CulturalRecord>,
    /// Row count before filtering.
    pub total_rows: usize,
}

#[derive(Debug, Serialize)]
pub struct MapPoint {
    pub art_form: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub cultural_value: String,
    pub tourism_visibility: Option<i64>,
    pub preservation_status: String,
}

/// Build the experiences view for the given predicate set.
pub fn build(source: &dyn DataSource, spec: &FilterSpec) -> Result<ExperiencesView> {
    let (cultural, _) = source.load(Dataset::Cultural)?;

    let mut categories = cultural.distinct_values(CATEGORY_COLUMN);
    categories.sort();
    let mut regions = cultural.distinct_values(REGION_COLUMN);
    regions.sort();

    let filtered = spec.apply(&cultural);
    let rows = CulturalRecord::all(&filtered);

    let points = rows
        .iter()
        .map(|record| {
            let (latitude, longitude) = jittered_coords(&record.region);
            MapPoint {
                art_form: record.art_form.clone(),
                region: record.region.clone(),
                latitude,
                longitude,
                cultural_value: record.cultural_value.clone(),
                tourism_visibility: record.tourism_visibility,
                preservation_status: record.preservation_status.clone(),
            }
        })
        .collect();

    Ok(ExperiencesView {
        categories,
        regions,
        points,
        rows,
        total_rows: cultural.row_count(),
    })
}

/// Region centroid with a ±0.5° jitter so overlapping sites stay visible.
fn jittered_coords(region: &str) -> (f64, f64) {
    let (lat, lon) = REGION_COORDS
        .get(region)
        .copied()
        .unwrap_or(FALLBACK_COORDS);
    (
        lat + (fastrand::f64() - 0.5),
        lon + (fastrand::f64() - 0.5),
    )
}
