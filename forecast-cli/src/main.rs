//! Binary crate for the `forecast-report` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Console reporting of the run outcome

use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Invocation};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match Cli::from_args(std::env::args_os()) {
        Invocation::Run(cmd) => println!("{}", cmd.execute().await?),
        Invocation::Usage => println!("{}", cli::MISSING_ARGS),
        Invocation::Clap(err)
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            err.exit()
        }
        Invocation::Clap(err) => err.print()?,
    }

    Ok(())
}
