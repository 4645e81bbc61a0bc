//! Cricket Stats CLI
//!
//! Fetches innings records from the club statistics API and renders the
//! season dashboard.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use cricket_stats::commands::{
    display_version, execute_build, validate_args, validate_report_file, BuildArgs,
};

/// Cricket Stats - club statistics dashboard
#[derive(Parser, Debug)]
#[command(name = "cricket-stats")]
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
    /// Fetch statistics and build the dashboard
    Build {
        /// Statistics API base URI
        #[arg(short, long, env = "API_URI")]
        api_uri: Option<String>,

        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output path for the HTML dashboard
        #[arg(short, long, default_value = "artifacts/dashboard.html")]
        output: PathBuf,

        /// Output path for the JSON report (optional)
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Chart width in pixels
        #[arg(long)]
        width: Option<usize>,

        /// Chart height in pixels
        #[arg(long)]
        height: Option<usize>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Rows per table in the text summary
        #[arg(long, default_value = "10")]
        summary_rows: usize,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
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

    match cli.command {
        Commands::Build {
            api_uri,
            config,
            output,
            json,
            width,
            height,
            summary,
            summary_rows,
        } => {
            let args = BuildArgs {
                api_uri,
                config_path: config,
                output_html: output,
                output_json: json,
                chart_width: width,
                chart_height: height,
                print_summary: summary,
                summary_rows,
            };

            // Validate args first
            validate_args(&args)?;

            execute_build(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
