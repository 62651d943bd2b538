//! Show command - print a dataset to the terminal.

use std::path::PathBuf;

use colored::Colorize;
use vividha::filter::VISIBILITY_COLUMN;
use vividha::{DataSource, DataTable, Dataset, FilterSpec, LocalFiles, RangeFilter};

#[allow(clippy::too_many_arguments)]
pub fn run(
    dataset: Dataset,
    category: Option<String>,
    regions: Vec<String>,
    min_visibility: Option<f64>,
    max_visibility: Option<f64>,
    data_dir: PathBuf,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = LocalFiles::new(&data_dir);
    let (table, meta) = source.load(dataset)?;

    if verbose {
        println!(
            "{} {} ({} rows, {} columns, {})",
            "Loaded".green(),
            meta.file,
            meta.row_count,
            meta.column_count,
            meta.format
        );
    }

    let mut spec = FilterSpec::new();
    spec.category = category;
    spec.regions = regions.into_iter().collect();
    if min_visibility.is_some() || max_visibility.is_some() {
        spec.range = Some(RangeFilter::new(
            VISIBILITY_COLUMN,
            min_visibility.unwrap_or(0.0),
            max_visibility.unwrap_or(100.0),
        ));
    }

    let view = if spec.is_empty() {
        table
    } else {
        spec.apply(&table)
    };

    if json {
        let rows: Vec<_> = (0..view.row_count())
            .filter_map(|row| view.row_map(row))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_table(&view);
        println!();
        println!("{} rows", view.row_count());
    }

    Ok(())
}

/// Print a table with padded columns, header first.
fn print_table(table: &DataTable) {
    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            table
                .column_values(col)
                .map(|v| v.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_line.join("  ").bold());

    for row in &table.rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:<width$}", v, width = w))
            .collect();
        println!("{}", line.join("  "));
    }
}
