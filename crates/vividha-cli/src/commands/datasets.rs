//! Datasets command - list the dataset catalog.

use std::path::PathBuf;

use colored::Colorize;
use vividha::{DataSource, Dataset, LocalFiles};

pub fn run(data_dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let source = LocalFiles::new(&data_dir);

    for dataset in Dataset::ALL {
        let path = dataset.path(&data_dir);
        match source.load(dataset) {
            Ok((table, _)) => println!(
                "{:<24} {:>6} rows   {}",
                dataset.to_string().green(),
                table.row_count(),
                path.display()
            ),
            Err(_) if dataset == Dataset::ArtifactRegistry => println!(
                "{:<24} {:>6}        {} (created on first submission)",
                dataset.to_string().yellow(),
                "-",
                path.display()
            ),
            Err(e) => println!("{:<24} {}", dataset.to_string().red(), e),
        }
    }

    Ok(())
}
