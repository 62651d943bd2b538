//! Submit command - append an artifact to the registry.

use std::path::PathBuf;

use colored::Colorize;
use vividha::{ArtifactSubmission, Dataset, Registry};

pub fn run(
    name: String,
    location: String,
    description: String,
    data_dir: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if name.trim().is_empty() || location.trim().is_empty() || description.trim().is_empty() {
        return Err("name, location and description are all required".into());
    }

    let registry = Registry::new(Dataset::ArtifactRegistry.path(&data_dir));
    let created = !registry.exists();

    let submission = ArtifactSubmission::new(name, location, description);
    registry.append(&submission)?;

    if created {
        println!("Created {}", registry.path().display());
    }
    println!(
        "{} {} ({})",
        "Recorded".green().bold(),
        submission.name,
        submission.location
    );
    if verbose {
        println!("  at {}", submission.submitted_on.to_rfc3339());
    }

    Ok(())
}
