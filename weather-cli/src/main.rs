//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and the interactive city prompt
//! - Writing the rendered widget to stdout or an HTML file

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod logging;
mod notify;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose)?;
    cmd.run().await
}
