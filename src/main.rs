// file: src/main.rs
// version: 1.0.0
// guid: b44578af-0b15-472c-b3ed-c884a5824673

//! zoneadm-facts - Main entry point

use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use zoneadm_facts::{
    cli::{self, Cli},
    logging::logger,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let logging = if cli.log_json {
        logger::init_json_logger(cli.verbose, cli.quiet)
    } else {
        logger::init_logger(cli.verbose, cli.quiet)
    };
    if let Err(e) = logging {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match cli::run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
