//! Binary crate for the `wx` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Reporting the rendered weather, or the error, and the exit status

use std::process::ExitCode;

use clap::Parser;
use log::debug;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose);
    debug!("{cmd:?}");

    match cmd.run().await {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err:#}");
            ExitCode::from(2)
        }
    }
}
