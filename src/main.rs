//! snipdeck - Random Code Snippets
//!
//! A terminal application that serves a random code or interview snippet
//! from one of several topical libraries, and keeps the snippets a user
//! wants to come back to.
//!
//! snipdeck provides developers with:
//! - A catalog of packaged snippet libraries (JavaScript, React, Python, ...)
//! - Random selection restricted to the libraries a user enabled
//! - Retrieval from a local asset directory or a remote base URL
//! - A saved list of favourite snippets

use color_eyre::Result;
use snipdeck::cli;
use tracing_subscriber::EnvFilter;

/// Application entry point and initialization
/// Installs error reporting and logging, then hands the arguments to the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::execute_cli(&args)
        .await
        .map_err(|err| color_eyre::eyre::eyre!("{err:#}"))?;

    Ok(())
}
