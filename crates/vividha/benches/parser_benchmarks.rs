//! Benchmarks for the dataset parser.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vividha::Parser;

fn synthetic_csv(rows: usize) -> Vec<u8> {
    let mut data = String::from("art_form,region,cultural_value,tourism_visibility\n");
    for i in 0..rows {
        data.push_str(&format!(
            "Form{},Region{},Category{},{}\n",
            i,
            i % 15,
            i % 4,
            i % 101
        ));
    }
    data.into_bytes()
}

fn bench_parse(c: &mut Criterion) {
    let parser = Parser::new();

    for rows in [100usize, 1_000, 10_000] {
        let data = synthetic_csv(rows);
        c.bench_function(&format!("parse_csv_{}_rows", rows), |b| {
            b.iter(|| parser.parse_bytes(black_box(&data), b',').unwrap())
        });
    }
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
