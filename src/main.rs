//! Bedrijvenkaart CLI
//!
//! Renders charts of Belgian company registration statistics
//! (1960-2020): SVG charts, interactive HTML documents, and a JSON
//! export of the derived tables.

use anyhow::Result;
use bedrijvenkaart::commands::{
    display_schema, display_version, execute_render, validate_args, validate_table_file,
    RenderArgs,
};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Bedrijvenkaart - charts of Belgian company statistics
#[derive(Parser, Debug)]
#[command(name = "bedrijvenkaart")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the derived tables and render the full chart catalog
    Render {
        /// Directory receiving all output files
        #[arg(short, long, default_value = "exports")]
        out_dir: PathBuf,

        /// Number of provinces per decade in the ranking panels
        #[arg(long, default_value = "5")]
        top: usize,

        /// Print a text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Render the SVG charts only, skip the HTML documents
        #[arg(long)]
        skip_html: bool,
    },

    /// Validate a metrics JSON export
    Validate {
        /// Path to metrics JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            out_dir,
            top,
            summary,
            skip_html,
        } => {
            let args = RenderArgs {
                out_dir,
                top,
                print_summary: summary,
                skip_html,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute render
            execute_render(args)?;
        }

        Commands::Validate { file } => {
            validate_table_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
