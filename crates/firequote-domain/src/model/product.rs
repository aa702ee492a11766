//! Extinguisher product catalog type definitions

use serde::{Deserialize, Serialize};

/// Extinguishing agent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    Water,
    Foam,
    Co2,
    AbcPowder,
    WetChemical,
    Avd,
}

impl AgentType {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AgentType::Water => "Water",
            AgentType::Foam => "Mechanical Foam",
            AgentType::Co2 => "CO2",
            AgentType::AbcPowder => "ABC Dry Powder",
            AgentType::WetChemical => "Wet Chemical",
            AgentType::Avd => "AVD",
        }
    }
}

impl std::fmt::Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for AgentType {
    type Err = firequote_types::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "water" => Ok(AgentType::Water),
            "foam" | "mechanical_foam" => Ok(AgentType::Foam),
            "co2" => Ok(AgentType::Co2),
            "abc" | "abc_powder" | "abc_dry_powder" => Ok(AgentType::AbcPowder),
            "wet_chemical" => Ok(AgentType::WetChemical),
            "avd" => Ok(AgentType::Avd),
            other => Err(firequote_types::Error::InvalidInput(format!(
                "unrecognized agent type: '{}'",
                other
            ))),
        }
    }
}

/// A purchasable extinguisher variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtinguisherProduct {
    pub agent_type: AgentType,
    /// Capacity label (e.g. "4 KG", "9 LTR")
    pub capacity_label: String,
    /// Fire rating label (e.g. "4A:144B")
    pub rating_label: String,
    /// Unit cost in whole currency units (₹)
    pub unit_cost: i64,
    /// Nominal protected area per unit, in m²
    pub coverage_area_m2: f64,
}

/// Product catalog keyed by agent type
///
/// Products for an agent are kept in ascending capacity order; lookups
/// preserve that order so selection is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: Vec<ExtinguisherProduct>,
}

impl ProductCatalog {
    pub fn new(products: Vec<ExtinguisherProduct>) -> Self {
        Self { products }
    }

    /// All products, in catalog order
    pub fn all(&self) -> &[ExtinguisherProduct] {
        &self.products
    }

    /// Products for an agent, in ascending capacity (catalog) order
    pub fn products_for(&self, agent: AgentType) -> Vec<&ExtinguisherProduct> {
        self.products
            .iter()
            .filter(|p| p.agent_type == agent)
            .collect()
    }

    /// Find the product for an exact (agent, capacity) pair
    pub fn find(&self, agent: AgentType, capacity_label: &str) -> Option<&ExtinguisherProduct> {
        self.products
            .iter()
            .find(|p| p.agent_type == agent && p.capacity_label == capacity_label)
    }
}
