//! Character planner inspection tool.
//!
//! Loads rules, catalog and a character profile from a data directory and
//! answers the planner's questions from the terminal.
//! Run with: `aoplan <command>`

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use aoplan_content::ContentFactory;
use clap::Parser;
use commands::{Bonuses, Check, Eligible, Profiles, Skills};
use config::CliConfig;

/// Requirement checks and bonus totals for character builds
#[derive(Parser)]
#[command(name = "aoplan")]
#[command(about = "Requirement checks and bonus totals for character builds", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory holding rules.toml, catalog.ron and profiles/
    /// (overrides AOPLAN_DATA_DIR)
    #[arg(short, long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Check whether a profile meets an entry's requirements
    Check(Check),

    /// List catalog entries a profile is eligible for
    Eligible(Eligible),

    /// Show stat bonuses from equipment, perks and buffs
    Bonuses(Bonuses),

    /// Show effective skill totals with their parts
    Skills(Skills),

    /// List available profiles
    Profiles(Profiles),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for AOPLAN_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    logging::setup_logging(&config.log_level, cli.verbose)?;
    tracing::debug!("Using data directory {}", config.data_dir.display());

    let factory = ContentFactory::new(&config.data_dir);

    match cli.command {
        Command::Check(cmd) => cmd.execute(&factory),
        Command::Eligible(cmd) => cmd.execute(&factory),
        Command::Bonuses(cmd) => cmd.execute(&factory),
        Command::Skills(cmd) => cmd.execute(&factory),
        Command::Profiles(cmd) => cmd.execute(&factory),
    }
}
