//! Benchmarks for the filter logic.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vividha::{DataTable, FilterSpec};

fn synthetic_table(rows: usize) -> DataTable {
    let table_rows = (0..rows)
        .map(|i| {
            vec![
                format!("Form{}", i),
                format!("Region{}", i % 15),
                format!("Category{}", i % 4),
                (i % 101).to_string(),
            ]
        })
        .collect();

    DataTable::new(
        vec![
            "art_form".into(),
            "region".into(),
            "cultural_value".into(),
            "tourism_visibility".into(),
        ],
        table_rows,
        b',',
    )
}

fn bench_filter(c: &mut Criterion) {
    let table = synthetic_table(10_000);

    let spec = FilterSpec::new()
        .with_category("Category1")
        .with_region("Region3")
        .with_region("Region7")
        .with_range("tourism_visibility", 25.0, 75.0);

    c.bench_function("filter_10k_rows_all_predicates", |b| {
        b.iter(|| spec.apply(black_box(&table)))
    });

    let region_only = FilterSpec::new().with_region("Region3");
    c.bench_function("filter_10k_rows_region_only", |b| {
        b.iter(|| region_only.apply(black_box(&table)))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
