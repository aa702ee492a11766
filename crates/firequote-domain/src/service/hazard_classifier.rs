//! Usage-to-hazard classification

use crate::model::{HazardLevel, UsageCategory};

/// Classify a floor's declared usage into a hazard level.
///
/// Total function: every usage category maps to exactly one level, and
/// unrecognized usage falls back to moderate rather than failing.
pub fn classify(usage: UsageCategory) -> HazardLevel {
    match usage {
        UsageCategory::Office | UsageCategory::Residential | UsageCategory::Corridor => {
            HazardLevel::Low
        }
        UsageCategory::Retail
        | UsageCategory::Parking
        | UsageCategory::Hotel
        | UsageCategory::Unknown => HazardLevel::Moderate,
        UsageCategory::Kitchen
        | UsageCategory::Storage
        | UsageCategory::Laboratory
        | UsageCategory::Server
        | UsageCategory::Workshop
        | UsageCategory::Factory => HazardLevel::High,
    }
}
