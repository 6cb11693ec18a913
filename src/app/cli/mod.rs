//! CLI adapter.

use clap::{Parser, Subcommand};

use crate::app::{api, report};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "suideploy")]
#[command(version)]
#[command(
    about = "Build, publish, and wire up the Sui stablecoin packages",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: publish all packages, create Treasury and
    /// Faucet, verify, and save contract IDs
    #[clap(visible_alias = "d")]
    Deploy {
        /// Answer yes to every prompt and reuse existing outputs
        #[arg(short, long)]
        yes: bool,
    },
    /// Build and publish a single package
    #[clap(visible_alias = "p")]
    Publish {
        /// Package name (sui_extensions, stablecoin, usdc)
        name: String,
    },
    /// Create the Treasury object from saved identifiers
    Treasury,
    /// Create the shared Faucet object from saved identifiers
    Faucet {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Verify the deployed coin type
    Verify,
    /// Show the identifiers saved in contract_ids.env
    #[clap(visible_alias = "s")]
    Status {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Deploy { yes } => api::deploy(yes).map(|outcome| {
            report::success("Build and deployment process completed.");
            report::info(&format!("Contract IDs: {}", outcome.env_path.display()));
        }),
        Commands::Publish { name } => api::publish_package(&name).map(|_| ()),
        Commands::Treasury => api::create_treasury().map(|_| ()),
        Commands::Faucet { yes } => api::create_faucet(yes).map(|_| ()),
        Commands::Verify => api::verify().map(|verified| {
            if verified {
                report::success("Coin type verification passed.");
            } else {
                report::warn("Coin type verification did not pass.");
            }
        }),
        Commands::Status { json } => api::status(json).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
