use anyhow::Result;

use fantasy_scoring::cli::Command;
use fantasy_scoring::{handle_score, handle_setup, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Setup => handle_setup(),
        Command::Score => handle_score(),
    }
}
