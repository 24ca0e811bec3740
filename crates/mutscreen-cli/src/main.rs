mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use clap::Parser;
use tracing::{debug, error, info};

use crate::cli::{Cli, Commands};
use crate::error::Result;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\nError: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("mutscreen v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = match cli.command {
        Commands::Screen(args) => {
            info!("Dispatching to 'screen' command.");
            commands::screen::run(args)
        }
        Commands::Matrices => {
            info!("Dispatching to 'matrices' command.");
            commands::matrices::run()
        }
        Commands::Ungap(args) => {
            info!("Dispatching to 'ungap' command.");
            commands::ungap::run(args)
        }
        Commands::Scores(args) => {
            info!("Dispatching to 'scores' command.");
            commands::scores::run(args)
        }
    };

    if let Err(e) = &result {
        error!("Command failed: {}", e);
    }
    result
}
