use clap::Parser;
use dotenvy::dotenv;
use std::env;

use resfinder_restaurant_service::run_pending_migrations;

/// Apply pending migrations to the restaurants database.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Connection string; defaults to DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,
}

pub fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    let cli = Cli::parse();

    let database_url = match cli.database_url {
        Some(url) => url,
        None => env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
    };

    let applied = run_pending_migrations(&database_url)?;

    if applied.is_empty() {
        println!("database is up to date");
    }
    for version in applied {
        println!("applied migration {}", version);
    }

    Ok(())
}
