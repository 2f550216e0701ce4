use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dietplan_shared::MealSlot;

mod cli;

/// dietplan - Personalized weekly diet plans
#[derive(Parser)]
#[command(name = "dietplan")]
#[command(about = "Biometric targets and seven-day meal plans from a food catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Food catalog CSV (overrides config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a seven-day plan and print it as JSON
    Plan {
        #[command(flatten)]
        profile: cli::ProfileArgs,

        /// Seed for reproducible meal picks
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print biometrics and nutritional targets only
    Analyze {
        #[command(flatten)]
        profile: cli::ProfileArgs,
    },
    /// List catalog rows with their categories
    Catalog {
        /// Only rows of this diet class
        #[arg(long)]
        diet: Option<String>,

        /// Only rows tagged for this meal slot
        #[arg(long)]
        slot: Option<MealSlot>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = dietplan::Config::load(cli.config.clone())?;
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    dietplan::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Plan { profile, seed } => cli::plan::plan(&config, profile.into_raw()?, seed)?,
        Commands::Analyze { profile } => cli::plan::analyze(profile.into_raw()?)?,
        Commands::Catalog { diet, slot } => cli::catalog::list(&config, diet, slot)?,
    }

    Ok(())
}
