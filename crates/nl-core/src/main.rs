//! Node launch resolution CLI.
//!
//! Resolves a node configuration document into a launch plan and prints it,
//! or validates the document without printing. Package URIs resolve against
//! the ament prefixes in `AMENT_PREFIX_PATH`.

use clap::{Parser, Subcommand, ValueEnum};
use nl_core::{load_document, resolve_plan, AmentPackageIndex, LaunchError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Node launch resolver - turns nested node configuration documents into launch plans
#[derive(Parser)]
#[command(name = "nl-core")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a configuration document and print the launch plan
    Resolve {
        /// Path to the configuration document (.yaml or .json)
        config: PathBuf,

        /// Output format
        #[arg(long, short = 'f', default_value = "json")]
        format: OutputFormat,
    },

    /// Validate a configuration document without printing the plan
    Check {
        /// Path to the configuration document (.yaml or .json)
        config: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), LaunchError> {
    match &cli.command {
        Commands::Resolve { config, format } => {
            let document = load_document(config)?;
            let plan = resolve_plan(&document, &AmentPackageIndex::from_env())?;
            let rendered = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&plan)
                    .map_err(|e| LaunchError::Render(e.to_string()))?,
                OutputFormat::Yaml => serde_yaml::to_string(&plan)
                    .map_err(|e| LaunchError::Render(e.to_string()))?,
            };
            println!("{rendered}");
            Ok(())
        }
        Commands::Check { config } => {
            let document = load_document(config)?;
            resolve_plan(&document, &AmentPackageIndex::from_env())?;
            println!("ok: {}", config.display());
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
