//! Quotation use case: building description in, priced quotation out

use firequote_domain::model::{BuildingDescription, HazardStandards, ProductCatalog, Quotation};
use firequote_domain::service::{build_quotation, compute_floor_requirement};
use firequote_types::{Error, Result};

use crate::constants::{bis_standards, default_catalog};

/// Run the full calculation for a building against the given tables.
///
/// Atomic: any per-floor failure propagates and no partial quotation is
/// produced. Floors are evaluated in the order given.
pub fn prepare_quotation(
    building: &BuildingDescription,
    standards: &HazardStandards,
    catalog: &ProductCatalog,
) -> Result<Quotation> {
    if building.floors.is_empty() {
        return Err(Error::InvalidInput(
            "building has no floors".to_string(),
        ));
    }

    let floor_results = building
        .floors
        .iter()
        .map(|floor| compute_floor_requirement(floor, building.fire_risk, standards, catalog))
        .collect::<Result<Vec<_>>>()?;

    build_quotation(&floor_results, catalog)
}

/// Same as [`prepare_quotation`] with the built-in BIS table and price list
pub fn prepare_quotation_with_defaults(building: &BuildingDescription) -> Result<Quotation> {
    prepare_quotation(building, bis_standards(), default_catalog())
}
