//! Regulatory standard type definitions (BIS 2190:2024)

use serde::{Deserialize, Serialize};

use super::HazardLevel;

/// Per-hazard-level placement standard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardStandard {
    /// Minimum extinguisher rating (e.g. "2A")
    pub rating: String,
    /// Floor area one unit is deemed to protect, in m²
    pub coverage_area_m2: f64,
    /// Maximum travel distance to reach a unit, in meters
    pub max_travel_distance_m: f64,
}

/// Standard table, one entry per hazard level
///
/// Injected into the calculation services as a parameter so the table can
/// be revised without touching calculation logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardStandards {
    pub low: HazardStandard,
    pub moderate: HazardStandard,
    pub high: HazardStandard,
}

impl HazardStandards {
    pub fn for_level(&self, level: HazardLevel) -> &HazardStandard {
        match level {
            HazardLevel::Low => &self.low,
            HazardLevel::Moderate => &self.moderate,
            HazardLevel::High => &self.high,
        }
    }
}
