//! Property-based tests for the filter logic.
//!
//! These tests use proptest to generate random tables and predicate sets
//! and verify the filtering invariants under all conditions:
//!
//! 1. **Subset**: no row is fabricated and input order is preserved
//! 2. **Idempotence**: filtering a filtered view changes nothing
//! 3. **Neutrality**: an empty region set equals no region filter
//! 4. **Bounds**: every kept row satisfies the inclusive range

use std::collections::BTreeSet;

use proptest::prelude::*;

use vividha::{DataTable, FilterSpec};

const REGIONS: &[&str] = &["Bihar", "Maharashtra", "Odisha", "Kerala", "Rajasthan"];
const CATEGORIES: &[&str] = &["Folk Painting", "Tribal Art", "Craft", "Performing Art"];

/// A visibility cell: a number, or a missing-value marker.
fn visibility_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..=100).prop_map(|v| v.to_string()),
        Just(String::new()),
        Just("NA".to_string()),
    ]
}

fn row() -> impl Strategy<Value = Vec<String>> {
    (
        "[A-Z][a-z]{2,10}",
        proptest::sample::select(REGIONS),
        proptest::sample::select(CATEGORIES),
        visibility_cell(),
    )
        .prop_map(|(art, region, category, visibility)| {
            vec![art, region.to_string(), category.to_string(), visibility]
        })
}

fn table() -> impl Strategy<Value = DataTable> {
    proptest::collection::vec(row(), 0..30).prop_map(|rows| {
        DataTable::new(
            vec![
                "art_form".into(),
                "region".into(),
                "cultural_value".into(),
                "tourism_visibility".into(),
            ],
            rows,
            b',',
        )
    })
}

fn region_set() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set(
        proptest::sample::select(REGIONS).prop_map(str::to_string),
        0..4,
    )
}

fn spec() -> impl Strategy<Value = FilterSpec> {
    (
        proptest::option::of(proptest::sample::select(CATEGORIES).prop_map(str::to_string)),
        region_set(),
        proptest::option::of((0.0f64..=50.0, 50.0f64..=100.0)),
    )
        .prop_map(|(category, regions, range)| {
            let mut spec = FilterSpec::new();
            spec.category = category;
            spec.regions = regions;
            if let Some((low, high)) = range {
                spec = spec.with_range("tourism_visibility", low, high);
            }
            spec
        })
}

proptest! {
    #[test]
    fn filtered_view_is_an_ordered_subset(table in table(), spec in spec()) {
        let view = spec.apply(&table);

        prop_assert!(view.row_count() <= table.row_count());
        prop_assert_eq!(&view.headers, &table.headers);

        // Every output row appears in the input, and in the same relative order
        let mut cursor = 0;
        for row in &view.rows {
            let found = table.rows[cursor..].iter().position(|r| r == row);
            prop_assert!(found.is_some(), "row fabricated or out of order");
            cursor += found.unwrap() + 1;
        }
    }

    #[test]
    fn filter_is_idempotent(table in table(), spec in spec()) {
        let once = spec.apply(&table);
        let twice = spec.apply(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn empty_region_set_keeps_every_row(table in table()) {
        // An empty selected-region set is no region constraint at all
        let view = FilterSpec::new().apply(&table);
        prop_assert_eq!(view.rows, table.rows);
    }

    #[test]
    fn selecting_every_region_equals_no_region_filter(table in table(), spec in spec()) {
        let mut all_regions = spec.clone();
        all_regions.regions = REGIONS.iter().map(|r| r.to_string()).collect();

        let mut none = spec.clone();
        none.regions = BTreeSet::new();

        // Row regions are always drawn from REGIONS, so selecting all of
        // them constrains nothing
        prop_assert_eq!(all_regions.apply(&table), none.apply(&table));
    }

    #[test]
    fn range_bounds_hold_on_kept_rows(table in table(), low in 0.0f64..=50.0, high in 50.0f64..=100.0) {
        let spec = FilterSpec::new().with_range("tourism_visibility", low, high);
        let view = spec.apply(&table);

        for row in 0..view.row_count() {
            let value = view.value(row, "tourism_visibility");
            prop_assert!(value.is_some(), "missing value passed the range filter");
            let v: f64 = value.unwrap().parse().unwrap();
            prop_assert!(low <= v && v <= high);
        }
    }

    #[test]
    fn filter_never_mutates_input(table in table(), spec in spec()) {
        let before = table.clone();
        let _ = spec.apply(&table);
        prop_assert_eq!(table, before);
    }
}
