//! Vividha CLI - cultural-heritage and tourism dashboard.

mod cli;
mod commands;
mod pages;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            data_dir,
            port,
            no_open,
            remote,
        } => commands::serve::run(data_dir, port, no_open, remote, cli.verbose),

        Commands::Show {
            dataset,
            category,
            region,
            min_visibility,
            max_visibility,
            data_dir,
            json,
        } => commands::show::run(
            dataset,
            category,
            region,
            min_visibility,
            max_visibility,
            data_dir,
            json,
            cli.verbose,
        ),

        Commands::Submit {
            name,
            location,
            description,
            data_dir,
        } => commands::submit::run(name, location, description, data_dir, cli.verbose),

        Commands::Datasets { data_dir } => commands::datasets::run(data_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
