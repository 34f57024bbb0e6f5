use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "fantasy esports scoring backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create the scoring schema in the database (idempotent)
    Setup,
    /// Calculate fantasy scores for all active rounds
    Score,
}
