// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. With --doc: write markdown docs to ./docs and stop
// 3. Install the logger
// 4. Decode the commit payload and run the download pipeline
// 5. Exit with 0 on success, 1 on any error
//
// The pipeline is strictly sequential, so a single-threaded tokio runtime
// drives the HTTP client.
// =============================================================================

mod cli;
mod config;
mod docs;
mod error;
mod filter;
mod github;
mod logging;
mod mirror;
mod payload;
mod pipeline;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use tracing::info;

use cli::Cli;
use github::GithubClient;
use pipeline::Pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.doc {
        let dir = std::env::current_dir()
            .map_err(|e| anyhow!("cannot determine current directory: {}", e))?
            .join("docs");
        docs::generate_markdown(&Cli::command(), &dir)?;
        println!("created markdown docs in {}", dir.display());
        return Ok(());
    }

    logging::init_logging(&cli.logging_config())?;

    let config = cli.pipeline_config()?;
    let commits = payload::decode_payload(cli.payload()?)?;
    info!(
        commits = commits.len(),
        owner = %config.owner,
        repository = %config.repository,
        suffixes = ?config.filter.suffixes(),
        "processing commit payload"
    );

    let client = GithubClient::new(cli.github_settings(), &config.owner, &config.repository)?;
    Pipeline::new(&config, &client).run(&commits).await?;

    Ok(())
}
