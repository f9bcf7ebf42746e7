//! Administrative command handlers.

use crate::config::Config;
use crate::db::Repository;
use crate::error::AppResult;
use clap::Subcommand;
use tracing::info;

/// Administrative commands available via CLI.
#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Run database migrations
    Migrate,

    /// Show user and contact counts
    Stats,
}

/// Run an administrative command with the given configuration.
pub async fn run(config: Config, admin_command: AdminCommands) -> AppResult<()> {
    let repository = Repository::connect(&config.database).await?;

    match admin_command {
        AdminCommands::Migrate => migrate(&repository).await,
        AdminCommands::Stats => stats(&repository).await,
    }
}

async fn migrate(repository: &Repository) -> AppResult<()> {
    info!("Running database migrations...");
    repository.run_migrations().await?;
    info!("Migrations completed successfully");
    Ok(())
}

async fn stats(repository: &Repository) -> AppResult<()> {
    info!("Fetching statistics...");
    let stats = repository.get_stats().await?;

    println!("\n=== Contacts API Statistics ===");
    println!("Users:     {}", stats.total_users);
    println!("Contacts:  {}", stats.total_contacts);
    println!();

    Ok(())
}
