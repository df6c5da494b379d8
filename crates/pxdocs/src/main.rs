//! pxdocs CLI - Project X documentation site configuration generator.
//!
//! Provides commands for:
//! - `build`: Emit the site framework configuration as JSON
//! - `sidebar`: Show the sidebars of one locale

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, SidebarArgs};
use output::Output;

/// pxdocs - Project X documentation site configuration generator.
#[derive(Parser)]
#[command(name = "pxdocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit the site configuration.
    Build(BuildArgs),
    /// Show the sidebars of one locale.
    Sidebar(SidebarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose,
        Commands::Sidebar(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
