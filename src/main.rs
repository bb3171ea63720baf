use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// nutrimeal - nutrition tracking and meal planning backend
#[derive(Parser)]
#[command(name = "nutrimeal")]
#[command(about = "Nutrition tracking and meal planning backend", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply migrations and start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage the recipe catalog
    Recipes {
        #[command(subcommand)]
        command: RecipesCommands,
    },
}

#[derive(Subcommand)]
enum RecipesCommands {
    /// Import recipes from a JSON array file
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = nutrimeal::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    nutrimeal::observability::init_observability(
        "nutrimeal",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        &config.server.environment,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::migrate::migrate(&config).await,
        Commands::Reset => cli::migrate::reset(&config).await,
        Commands::Recipes {
            command: RecipesCommands::Import { file },
        } => cli::recipes::import(&config, &file).await,
    }
}
