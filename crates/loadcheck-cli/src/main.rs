use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "loadcheck")]
#[command(about = "loadcheck - vehicle loading inspection checklist client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every field of the inspection form
    Catalog,
    /// Load an answer sheet and report missing or invalid answers
    Check {
        /// Path to the answer sheet (TOML)
        sheet: PathBuf,
    },
    /// Show the payload an answer sheet would be sent as
    Preview {
        /// Path to the answer sheet (TOML)
        sheet: PathBuf,
    },
    /// Send an answer sheet to the form endpoint
    Submit {
        /// Path to the answer sheet (TOML)
        sheet: PathBuf,
        /// Override the configured endpoint
        #[arg(long)]
        endpoint: Option<String>,
        /// Refuse to send when the sheet has validation issues
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("loadcheck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog => commands::catalog::list(),
        Commands::Check { sheet } => commands::check::run(&sheet).await?,
        Commands::Preview { sheet } => commands::preview::run(&sheet).await?,
        Commands::Submit {
            sheet,
            endpoint,
            strict,
        } => commands::submit::run(&sheet, endpoint, strict).await?,
    }

    Ok(())
}
