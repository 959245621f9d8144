#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{AskInput, AskStrategy, CommandStrategy, DemoStrategy, VersionStrategy};

#[derive(Parser)]
#[command(name = "clatbot")]
#[command(about = "Rule-based CLAT exam Q&A responder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a query (interactive if no message is given)
    Ask {
        /// Single query to answer
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// JSON knowledge base replacing the embedded data
        #[arg(short = 'k', long)]
        knowledge: Option<PathBuf>,
    },
    /// Run the reference sample queries
    Demo,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { message, knowledge } => AskStrategy.execute(AskInput { message, knowledge }),
        Commands::Demo => DemoStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
