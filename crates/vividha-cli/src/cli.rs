//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vividha::Dataset;

/// Vividha: cultural-heritage and tourism dashboard
#[derive(Parser)]
#[command(name = "vividha")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard web server
    Serve {
        /// Directory holding the dataset files
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,

        /// Port for the web server
        #[arg(short, long, default_value = "8601")]
        port: u16,

        /// Don't automatically open the browser
        #[arg(long)]
        no_open: bool,

        /// Load datasets from the remote database configured via
        /// VIVIDHA_DB_* environment variables instead of local files
        #[arg(long)]
        remote: bool,
    },

    /// Print a dataset, optionally filtered
    Show {
        /// Dataset to show (e.g. cultural, heritage-sites, registry)
        #[arg(value_name = "DATASET")]
        dataset: Dataset,

        /// Keep only rows with this category label
        #[arg(long)]
        category: Option<String>,

        /// Keep only rows from these regions (repeatable)
        #[arg(long)]
        region: Vec<String>,

        /// Lower bound for the tourism-visibility range filter
        #[arg(long)]
        min_visibility: Option<f64>,

        /// Upper bound for the tourism-visibility range filter
        #[arg(long)]
        max_visibility: Option<f64>,

        /// Directory holding the dataset files
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append an artifact submission to the registry
    Submit {
        /// Artifact name
        #[arg(long)]
        name: String,

        /// Location or region
        #[arg(long)]
        location: String,

        /// Free-text description
        #[arg(long)]
        description: String,

        /// Directory holding the dataset files
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// List the dataset catalog and file status
    Datasets {
        /// Directory holding the dataset files
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },
}
