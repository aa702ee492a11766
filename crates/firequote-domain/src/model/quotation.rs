//! Quotation type definitions

use serde::{Deserialize, Serialize};

use super::{AgentType, Floor, HazardLevel};

/// GST rate applied once to the quotation subtotal
pub const TAX_RATE: f64 = 0.18;

/// Calculated requirement for a single floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorResult {
    pub floor: Floor,
    pub hazard_level: HazardLevel,
    pub extinguishers_required: u32,
    /// Capacity label of the recommended product (e.g. "9 KG")
    pub recommended_capacity: String,
    pub agent_type: AgentType,
    /// Explanatory notes (occupancy overrides, minimum-floor rule)
    pub notes: Vec<String>,
}

/// One priced line of the quotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    /// Unit price in whole currency units (₹)
    pub unit_price: i64,
    pub quantity: u32,
    pub subtotal: i64,
}

/// Complete priced quotation for a building
///
/// Monetary fields are whole currency units; tax is rounded half-up once
/// from the exact subtotal, never per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    pub floor_results: Vec<FloorResult>,
    pub total_extinguishers: u32,
    pub line_items: Vec<LineItem>,
    pub subtotal_excl_tax: i64,
    pub tax_rate: f64,
    pub tax_amount: i64,
    pub grand_total: i64,
}
