pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod scoring;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::scoring::ScoringService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_setup() -> Result<()> {
    let pool = database::create_pool(&required_database_path()?)?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::apply_schema(&mut conn)
}

pub fn handle_score() -> Result<()> {
    let pool = database::create_pool(&required_database_path()?)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ScoringService::new(config, pool);
        service.run().await
    })
}

fn required_database_path() -> Result<String> {
    std::env::var("DATABASE_PATH").context("DATABASE_PATH is required")
}
