//! CLI definition using clap

use clap::{Parser, Subcommand};
use firequote_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "firequote")]
#[command(version)]
#[command(about = "Fire extinguisher requirement and quotation calculator (BIS 2190:2024)")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate a full quotation for a building
    Quote {
        /// Building description JSON file
        building: Option<PathBuf>,

        /// Floor list CSV file (floor_no, area, unit, usage) as an
        /// alternative to the building JSON; requires --fire-risk
        #[arg(long)]
        floors: Option<PathBuf>,

        /// Dominant fire risk class (A, B, C, D, E, F, mixed)
        #[arg(long)]
        fire_risk: Option<String>,

        /// Replacement product catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print a plain-text quotation report instead of structured output
        #[arg(long)]
        report: bool,
    },

    /// Calculate the requirement for a single floor
    Floor {
        /// Floor area
        #[arg(long)]
        area: f64,

        /// Area unit (meters, feet). Uses config value if not specified.
        #[arg(long)]
        unit: Option<String>,

        /// Floor usage (office, kitchen, storage, ...)
        #[arg(long)]
        usage: String,

        /// Dominant fire risk class (A, B, C, D, E, F, mixed)
        #[arg(long, default_value = "mixed")]
        fire_risk: String,
    },

    /// Print the BIS hazard standard table
    Standards,

    /// Print the product catalog
    Catalog {
        /// Filter by agent type (water, foam, co2, abc, wet_chemical, avd)
        #[arg(long)]
        agent: Option<String>,
    },

    /// Show or change persisted defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the default output format
    SetFormat {
        format: OutputFormat,
    },
    /// Set the default area unit
    SetUnit {
        unit: String,
    },
}
