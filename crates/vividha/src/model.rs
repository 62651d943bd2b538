//! Typed records extracted from the tabular datasets.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::DataTable;

/// Placeholder image shown when an art form has no asset row.
pub const PLACEHOLDER_IMAGE: &str = "https://placeholder.svg?height=400&width=600";
/// Placeholder description for a missing asset row.
pub const PLACEHOLDER_DESCRIPTION: &str = "Description not available.";
/// Region label used when neither the asset nor the cultural row has one.
pub const PLACEHOLDER_REGION: &str = "Unknown";

/// Shown for cultural fields the dataset does not carry for a row.
pub const NOT_AVAILABLE: &str = "N/A";

/// Assumed age when the age column is absent or unparseable.
pub const DEFAULT_AGE_YEARS: i64 = 2000;

static AGE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid age pattern"));

/// Parse the leading number out of an age label like `"2,500+ years"`.
pub fn approx_age_years(age: &str) -> i64 {
    let cleaned = age.replace(',', "");
    AGE_DIGITS
        .find(&cleaned)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_AGE_YEARS)
}

/// One row of the cultural dataset.
///
/// `art_form` is unique within a load; the record is immutable for the
/// duration of the render that loaded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalRecord {
    pub art_form: String,
    pub region: String,
    pub cultural_value: String,
    /// 0–100 visibility index; `None` when missing.
    pub tourism_visibility: Option<i64>,
    pub preservation_status: String,
    pub age: Option<String>,
}

impl CulturalRecord {
    /// Extract the record at `row`; `None` when the row has no art form.
    pub fn from_row(table: &DataTable, row: usize) -> Option<Self> {
        let art_form = table.value(row, "art_form")?.to_string();
        Some(Self {
            art_form,
            region: table
                .value(row, "region")
                .unwrap_or(PLACEHOLDER_REGION)
                .to_string(),
            cultural_value: table
                .value(row, "cultural_value")
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            tourism_visibility: table
                .value(row, "tourism_visibility")
                .and_then(|v| v.trim().parse().ok()),
            preservation_status: table
                .value(row, "preservation_status")
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            age: table.value(row, "age").map(str::to_string),
        })
    }

    /// Every extractable record, in row order.
    pub fn all(table: &DataTable) -> Vec<Self> {
        (0..table.row_count())
            .filter_map(|row| Self::from_row(table, row))
            .collect()
    }

    /// Find a record by art form. Art forms are unique per load, so the
    /// first match is the record.
    pub fn find(table: &DataTable, art_form: &str) -> Option<Self> {
        let col = table.column_index("art_form")?;
        let row = table
            .rows
            .iter()
            .position(|r| r.get(col).map(String::as_str) == Some(art_form))?;
        Self::from_row(table, row)
    }

    /// Approximate age in years, from the age label when present.
    pub fn approx_age_years(&self) -> i64 {
        self.age
            .as_deref()
            .map(approx_age_years)
            .unwrap_or(DEFAULT_AGE_YEARS)
    }
}

/// Presentation assets for an art form, joined by `art_form` equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtAsset {
    pub art_form: String,
    pub image_url: String,
    pub description: String,
    pub region: String,
}

impl ArtAsset {
    /// The documented defaults applied on a join miss, one per field.
    pub fn placeholder(art_form: &str) -> Self {
        Self {
            art_form: art_form.to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            region: PLACEHOLDER_REGION.to_string(),
        }
    }

    /// Look up the asset row for an art form. A missing table or a join
    /// miss yields the placeholder; it is never an error.
    pub fn find_or_placeholder(table: Option<&DataTable>, art_form: &str) -> Self {
        let Some(table) = table else {
            return Self::placeholder(art_form);
        };
        let Some(col) = table.column_index("art_form") else {
            return Self::placeholder(art_form);
        };
        let Some(row) = table
            .rows
            .iter()
            .position(|r| r.get(col).map(String::as_str) == Some(art_form))
        else {
            return Self::placeholder(art_form);
        };

        Self {
            art_form: art_form.to_string(),
            image_url: table
                .value(row, "image_url")
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
            description: table
                .value(row, "description")
                .unwrap_or(PLACEHOLDER_DESCRIPTION)
                .to_string(),
            region: table
                .value(row, "region")
                .unwrap_or(PLACEHOLDER_REGION)
                .to_string(),
        }
    }
}

/// A user-submitted artifact record.
///
/// Appended to the registry and mirrored into the session log; never
/// updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactSubmission {
    pub name: String,
    pub location: String,
    pub description: String,
    pub submitted_on: DateTime<Utc>,
}

impl ArtifactSubmission {
    /// Create a submission stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            description: description.into(),
            submitted_on: Utc::now(),
        }
    }
}
