//! Per-floor extinguisher requirement calculation

use std::f64::consts::PI;

use crate::model::{
    AgentType, ExtinguisherProduct, FireRiskClass, Floor, FloorResult, HazardStandards,
    ProductCatalog, UsageCategory,
};
use crate::service::hazard_classifier::classify;
use firequote_types::{Error, Result};

/// Floors of this size or larger always get at least two units
const MIN_TWO_UNITS_AREA_M2: f64 = 100.0;

/// Map the declared fire-risk class to an extinguishing agent
pub fn agent_for_risk(fire_risk: FireRiskClass) -> AgentType {
    match fire_risk {
        FireRiskClass::A => AgentType::Water,
        FireRiskClass::B => AgentType::Foam,
        FireRiskClass::C => AgentType::Co2,
        FireRiskClass::E => AgentType::Avd,
        FireRiskClass::F => AgentType::WetChemical,
        FireRiskClass::D | FireRiskClass::Mixed => AgentType::AbcPowder,
    }
}

/// Compute the extinguisher requirement for a single floor.
///
/// The count is the stricter of the coverage-area bound and the
/// travel-distance bound (circular reach, π·d²), with a minimum of two
/// units on floors of 100 m² or more. Kitchen and server occupancies
/// override the building-wide agent selection.
pub fn compute_floor_requirement(
    floor: &Floor,
    fire_risk: FireRiskClass,
    standards: &HazardStandards,
    catalog: &ProductCatalog,
) -> Result<FloorResult> {
    if floor.raw_area.is_nan() || floor.raw_area <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "floor {} has non-positive area: {}",
            floor.number, floor.raw_area
        )));
    }

    let area_m2 = floor.area_in_meters()?;
    let hazard = classify(floor.usage);
    let standard = standards.for_level(hazard);

    let by_coverage = (area_m2 / standard.coverage_area_m2).ceil() as u32;
    let reach_area = PI * standard.max_travel_distance_m * standard.max_travel_distance_m;
    let by_travel = (area_m2 / reach_area).ceil() as u32;

    let mut required = by_coverage.max(by_travel).max(1);

    let mut notes = Vec::new();
    if area_m2 >= MIN_TWO_UNITS_AREA_M2 && required < 2 {
        required = 2;
        notes.push(format!(
            "Minimum of 2 units required for floors of {} m² or more",
            MIN_TWO_UNITS_AREA_M2 as u32
        ));
    }

    // Occupancy hazard overrides the declared building-wide fire risk
    let agent = match floor.usage {
        UsageCategory::Kitchen => {
            notes.push(
                "Kitchen occupancy: wet chemical (F-class) agent required regardless of declared fire risk"
                    .to_string(),
            );
            AgentType::WetChemical
        }
        UsageCategory::Server => {
            notes.push(
                "Server room occupancy: CO2 agent required regardless of declared fire risk"
                    .to_string(),
            );
            AgentType::Co2
        }
        _ => agent_for_risk(fire_risk),
    };

    let product = select_capacity(catalog, agent, area_m2)?;

    Ok(FloorResult {
        floor: floor.clone(),
        hazard_level: hazard,
        extinguishers_required: required,
        recommended_capacity: product.capacity_label.clone(),
        agent_type: agent,
        notes,
    })
}

/// Pick a capacity for the agent by fixed area breakpoints over the
/// catalog's ascending-capacity listing, clamped to the largest available.
///
/// An agent with no catalog entries is a hard error; silently substituting
/// a different product could understate a compliance requirement.
fn select_capacity(
    catalog: &ProductCatalog,
    agent: AgentType,
    area_m2: f64,
) -> Result<&ExtinguisherProduct> {
    let products = catalog.products_for(agent);
    if products.is_empty() {
        return Err(Error::MissingCatalogEntry {
            agent: agent.label().to_string(),
            capacity: "any".to_string(),
        });
    }

    let tier = if area_m2 < 200.0 {
        0
    } else if area_m2 < 500.0 {
        1
    } else if area_m2 < 1000.0 {
        2
    } else {
        3
    };

    Ok(products[tier.min(products.len() - 1)])
}
