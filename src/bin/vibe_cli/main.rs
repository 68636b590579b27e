// ABOUTME: Vibe CLI - command-line front end for the Vibe Fitness engine
// ABOUTME: Profile onboarding, macro targets, daily tasks, levels, and plan-service requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Onboard from a profile JSON file and print macro targets
//! vibe-cli profile set ./profile.json
//!
//! # Derive macros for a file without touching stored state
//! vibe-cli macros --profile ./profile.json
//!
//! # Work through today's tasks
//! vibe-cli tasks list
//! vibe-cli tasks toggle 1
//! vibe-cli tasks progress 2 1.5
//!
//! # Ask the plan service for a diet plan
//! vibe-cli plan diet
//!
//! # Forget the stored profile and session
//! vibe-cli logout
//! ```

mod commands;
mod helpers;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use vibe_fitness::external::MealCategory;
use vibe_fitness::logging::LoggingConfig;
use vibe_fitness::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "vibe-cli",
    about = "Vibe Fitness CLI",
    long_about = "Derive daily calorie and macro targets, track daily tasks, and request plans from the plan service."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the stored profile and session
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile management
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Print daily calorie and macro targets
    Macros {
        /// Profile JSON file (defaults to the stored profile)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Daily task commands
    Tasks {
        #[command(subcommand)]
        action: TaskCommand,
    },

    /// Show level and points
    Level,

    /// Remove the stored profile and session
    Logout,

    /// Plan-service requests
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Check whether the plan service is reachable
    Health,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Store a profile from a JSON file and derive macro targets
    Set {
        /// Profile JSON file
        file: PathBuf,
    },

    /// Print the stored profile
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TaskCommand {
    /// List today's tasks
    List,

    /// Flip a task between completed and not completed
    Toggle {
        /// Task id
        id: String,
    },

    /// Record progress on a task
    Progress {
        /// Task id
        id: String,

        /// New progress value, clamped to the task goal
        value: f64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Seven-day diet plan at the derived calorie target
    Diet {
        /// Also request a categorized shopping list
        #[arg(long)]
        shopping_list: bool,
    },

    /// Eight-week workout plan
    Workout {
        /// Training days per week
        #[arg(long)]
        days: Option<u8>,
    },

    /// Hydration, supplement, and meal-timing recommendations
    Recommendations,

    /// Search the meal database
    Meals {
        /// Meal category
        #[arg(value_enum)]
        category: MealArg,

        /// Dietary restriction filter (e.g. vegan, keto)
        #[arg(long)]
        restriction: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MealArg {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl From<MealArg> for MealCategory {
    fn from(arg: MealArg) -> Self {
        match arg {
            MealArg::Breakfast => Self::Breakfast,
            MealArg::Lunch => Self::Lunch,
            MealArg::Dinner => Self::Dinner,
            MealArg::Snacks => Self::Snacks,
        }
    }
}

fn resolve_state_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    explicit
        .or_else(|| dirs::data_dir().map(|dir| dir.join("vibe-fitness")))
        .ok_or_else(|| anyhow!("No data directory on this platform; pass --state-dir"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let store = JsonFileStore::new(resolve_state_dir(cli.state_dir)?);
    debug!(state_dir = %store.dir().display(), "Using state directory");
    let json = cli.json;

    match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Set { file } => commands::profile::set(&store, &file, json)?,
            ProfileCommand::Show => commands::profile::show(&store, json)?,
        },
        Command::Macros { profile } => commands::profile::macros(&store, profile.as_deref(), json)?,
        Command::Tasks { action } => match action {
            TaskCommand::List => commands::tasks::list(&store, json)?,
            TaskCommand::Toggle { id } => commands::tasks::toggle(&store, &id, json)?,
            TaskCommand::Progress { id, value } => {
                commands::tasks::progress(&store, &id, value, json)?;
            }
        },
        Command::Level => commands::tasks::level(&store, json)?,
        Command::Logout => commands::profile::logout(&store)?,
        Command::Plan { action } => match action {
            PlanCommand::Diet { shopping_list } => {
                commands::plan::diet(&store, shopping_list, json).await?;
            }
            PlanCommand::Workout { days } => commands::plan::workout(&store, days, json).await?,
            PlanCommand::Recommendations => commands::plan::recommendations(&store, json).await?,
            PlanCommand::Meals {
                category,
                restriction,
            } => {
                commands::plan::meals(category.into(), restriction.as_deref(), json).await?;
            }
        },
        Command::Health => commands::plan::health(json).await?,
    }

    Ok(())
}
