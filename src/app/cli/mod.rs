//! CLI Adapter.

mod configure;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::commands::configure::ConfigureOptions;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "mapme-setup")]
#[command(version)]
#[command(
    about = "Generate backend, frontend, and database .env files for MapMe",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root containing backend/, frontend/, and database/ (defaults to current directory)
    #[arg(long, env = "MAPME_SETUP_ROOT")]
    root: Option<PathBuf>,

    /// Accept every default without prompting
    #[arg(short = 'y', long)]
    defaults: bool,

    /// Print the generated files instead of writing them
    #[arg(long)]
    dry_run: bool,

    /// Skip local IP detection
    #[arg(long)]
    no_detect: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the detected local IP address
    #[clap(visible_alias = "ip")]
    DetectIp,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Some(Commands::DetectIp) => configure::run_detect_ip(),
        None => {
            let options = ConfigureOptions {
                detect_ip: !cli.no_detect,
                accept_defaults: cli.defaults,
                dry_run: cli.dry_run,
            };
            configure::run_configure(cli.root, options)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
