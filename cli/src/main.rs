#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod artifacts;
mod build;
mod verify;

#[derive(Parser, Debug)]
#[command(name = "airdrop")]
#[command(about = "Whitelist tree tooling for the merkle airdrop program", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the merkle root and per-account proofs from a whitelist
    Build(build::Cli),
    /// Check one account's published proof against a root artifact
    Verify(verify::Cli),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => build::run(&args)?,
        Commands::Verify(args) => verify::run(&args)?,
    }

    Ok(())
}
