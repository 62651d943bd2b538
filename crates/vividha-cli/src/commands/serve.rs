//! Serve command - run the dashboard web server.

use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use vividha::{DataSource, Dataset, LocalFiles, RemoteDatabase};

use crate::server::{app, state::AppState};

pub fn run(
    data_dir: PathBuf,
    port: u16,
    no_open: bool,
    remote: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // The data source is picked once here; there is no runtime switch.
    let source: Arc<dyn DataSource> = if remote {
        Arc::new(RemoteDatabase::from_env()?)
    } else {
        Arc::new(LocalFiles::new(&data_dir))
    };

    if verbose {
        println!("Data source: {}", source.describe());
    }

    let registry_path = Dataset::ArtifactRegistry.path(&data_dir);
    let state = AppState::new(source, registry_path);

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting dashboard at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Data: {}", data_dir.display());
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
