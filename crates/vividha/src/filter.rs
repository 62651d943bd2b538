//! Row filtering over loaded tables.
//!
//! Predicates are conjunctive across kinds and OR within the region set.
//! A filtered view is always a fresh, order-preserving subset with the same
//! headers; the input table is never mutated, and an empty result is a
//! table, not an error. A predicate naming a column the table does not have
//! is ignored, matching how the pages treat optional columns.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::DataTable;

/// Column holding the category label matched by [`FilterSpec::category`].
pub const CATEGORY_COLUMN: &str = "cultural_value";
/// Column holding the region label matched by [`FilterSpec::regions`].
pub const REGION_COLUMN: &str = "region";
/// Column the visibility range slider filters on.
pub const VISIBILITY_COLUMN: &str = "tourism_visibility";

/// Inclusive numeric bound on a named column.
///
/// Rows whose value is missing or non-numeric never pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub column: String,
    pub low: f64,
    pub high: f64,
}

impl RangeFilter {
    /// Create an inclusive `[low, high]` bound on `column`.
    pub fn new(column: impl Into<String>, low: f64, high: f64) -> Self {
        Self {
            column: column.into(),
            low,
            high,
        }
    }

    fn keeps(&self, value: Option<&str>) -> bool {
        match value.and_then(|v| v.trim().parse::<f64>().ok()) {
            Some(v) => self.low <= v && v <= self.high,
            None => false,
        }
    }
}

/// The user-selected predicate set applied to a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact-match label on the category column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Keep rows whose region is in the set; empty means no constraint.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub regions: BTreeSet<String>,
    /// Inclusive numeric bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeFilter>,
}

impl FilterSpec {
    /// A spec with no predicates; applying it is the identity on rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add a region to the selected set.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.regions.insert(region.into());
        self
    }

    /// Set the numeric range bound.
    pub fn with_range(mut self, column: impl Into<String>, low: f64, high: f64) -> Self {
        self.range = Some(RangeFilter::new(column, low, high));
        self
    }

    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.regions.is_empty() && self.range.is_none()
    }

    /// Apply the predicates, producing an order-preserving subset.
    pub fn apply(&self, table: &DataTable) -> DataTable {
        let rows = table
            .rows
            .iter()
            .enumerate()
            .filter(|(row, _)| self.keeps_row(table, *row))
            .map(|(_, values)| values.clone())
            .collect();

        DataTable::new(table.headers.clone(), rows, table.delimiter)
    }

    fn keeps_row(&self, table: &DataTable, row: usize) -> bool {
        if let Some(category) = &self.category {
            if table.column_index(CATEGORY_COLUMN).is_some()
                && table.value(row, CATEGORY_COLUMN) != Some(category.as_str())
            {
                return false;
            }
        }

        if !self.regions.is_empty() && table.column_index(REGION_COLUMN).is_some() {
            match table.value(row, REGION_COLUMN) {
                Some(region) if self.regions.contains(region) => {}
                _ => return false,
            }
        }

        if let Some(range) = &self.range {
            if table.column_index(&range.column).is_some()
                && !range.keeps(table.value(row, &range.column))
            {
                return false;
            }
        }

        true
    }
}
