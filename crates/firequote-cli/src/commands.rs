//! Command handlers

use std::path::PathBuf;

use chrono::Utc;

use firequote_app::app::prepare_quotation;
use firequote_app::config::Config;
use firequote_app::constants::{bis_standards, default_catalog};
use firequote_domain::model::{
    AgentType, BuildingDescription, FireRiskClass, Floor, ProductCatalog, Unit, UsageCategory,
};
use firequote_domain::service::{compute_floor_requirement, generate_quotation_report};
use firequote_infra::{load_building_from_json, load_catalog_from_json, load_floors_from_csv};
use firequote_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands, ConfigAction};
use crate::output;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Quote {
            building,
            floors,
            fire_risk,
            catalog,
            report,
        } => cmd_quote(
            &config,
            format,
            cli.verbose,
            building,
            floors,
            fire_risk,
            catalog,
            report,
        ),
        Commands::Floor {
            area,
            unit,
            usage,
            fire_risk,
        } => cmd_floor(&config, format, area, unit, &usage, &fire_risk),
        Commands::Standards => {
            output::output_standards(format, bis_standards());
            Ok(())
        }
        Commands::Catalog { agent } => cmd_catalog(&config, format, agent),
        Commands::Config { action } => cmd_config(config, action),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_quote(
    config: &Config,
    format: OutputFormat,
    verbose: bool,
    building_path: Option<PathBuf>,
    floors_path: Option<PathBuf>,
    fire_risk: Option<String>,
    catalog_path: Option<PathBuf>,
    report: bool,
) -> Result<()> {
    let building = match (building_path, floors_path) {
        (Some(path), None) => load_building_from_json(&path)?,
        (None, Some(path)) => {
            let risk: FireRiskClass = fire_risk
                .ok_or_else(|| {
                    Error::InvalidInput("--fire-risk is required with --floors".to_string())
                })?
                .parse()?;
            let mut building = BuildingDescription::new(risk);
            building.floors = load_floors_from_csv(&path)?;
            building
        }
        (Some(_), Some(_)) => {
            return Err(Error::InvalidInput(
                "supply either a building JSON or --floors, not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(Error::InvalidInput(
                "supply a building JSON file or --floors <csv>".to_string(),
            ))
        }
    };

    let loaded_catalog: Option<ProductCatalog> = match catalog_path {
        Some(path) => Some(load_catalog_from_json(&path)?),
        None => None,
    };
    let catalog = loaded_catalog.as_ref().unwrap_or_else(|| default_catalog());

    if verbose {
        eprintln!(
            "Calculating for {} floor(s), fire risk: {}",
            building.floors.len(),
            building.fire_risk
        );
    }

    let quotation = prepare_quotation(&building, bis_standards(), catalog)?;

    if report {
        println!("Prepared on {}", Utc::now().format("%Y-%m-%d"));
        print!("{}", generate_quotation_report(&quotation));
    } else {
        output::output_quotation(format, &quotation, &config.currency_symbol)?;
    }
    Ok(())
}

fn cmd_floor(
    config: &Config,
    format: OutputFormat,
    area: f64,
    unit: Option<String>,
    usage: &str,
    fire_risk: &str,
) -> Result<()> {
    let unit: Unit = unit.unwrap_or_else(|| config.default_unit.clone()).parse()?;
    let usage = UsageCategory::from_tag(usage)?;
    let risk: FireRiskClass = fire_risk.parse()?;

    let floor = Floor {
        number: 1,
        raw_area: area,
        unit,
        usage,
    };
    let result = compute_floor_requirement(&floor, risk, bis_standards(), default_catalog())?;
    output::output_floor_result(format, &result)
}

fn cmd_catalog(config: &Config, format: OutputFormat, agent: Option<String>) -> Result<()> {
    let catalog = default_catalog();
    let filter: Option<AgentType> = match agent {
        Some(tag) => Some(tag.parse()?),
        None => None,
    };
    let products: Vec<_> = catalog
        .all()
        .iter()
        .filter(|p| filter.map_or(true, |agent| p.agent_type == agent))
        .collect();
    output::output_catalog(format, &products, &config.currency_symbol)
}

fn cmd_config(mut config: Config, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetFormat { format } => {
            config.output_format = format;
            config.save()?;
            println!("Default output format set to {}", format);
        }
        ConfigAction::SetUnit { unit } => {
            // Validate before persisting
            unit.parse::<Unit>()?;
            config.default_unit = unit.trim().to_lowercase();
            config.save()?;
            println!("Default unit set to {}", config.default_unit);
        }
    }
    Ok(())
}
