//! Hazard classification type definitions

use firequote_types::Error;
use serde::{Deserialize, Serialize};

/// Coarse risk tier driving per-unit coverage area and travel distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardLevel {
    Low,
    Moderate,
    High,
}

impl HazardLevel {
    /// Display label ("LOW", "MODERATE", "HIGH")
    pub fn label(&self) -> &'static str {
        match self {
            HazardLevel::Low => "LOW",
            HazardLevel::Moderate => "MODERATE",
            HazardLevel::High => "HIGH",
        }
    }
}

/// Declared usage of a floor
///
/// The tag set is extensible: unmapped tags parse to `Unknown`, which the
/// classifier treats as moderate hazard rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageCategory {
    Office,
    Retail,
    Kitchen,
    Storage,
    Residential,
    Corridor,
    Parking,
    Laboratory,
    Server,
    Workshop,
    Hotel,
    Factory,
    #[serde(other)]
    Unknown,
}

impl UsageCategory {
    /// Parse a usage tag. Empty input is rejected; unrecognized
    /// non-empty tags map to `Unknown`.
    pub fn from_tag(tag: &str) -> Result<Self, Error> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(Error::InvalidInput("usage tag is empty".to_string()));
        }
        Ok(match tag.to_lowercase().as_str() {
            "office" => UsageCategory::Office,
            "retail" => UsageCategory::Retail,
            "kitchen" => UsageCategory::Kitchen,
            "storage" => UsageCategory::Storage,
            "residential" => UsageCategory::Residential,
            "corridor" => UsageCategory::Corridor,
            "parking" => UsageCategory::Parking,
            "laboratory" => UsageCategory::Laboratory,
            "server" => UsageCategory::Server,
            "workshop" => UsageCategory::Workshop,
            "hotel" => UsageCategory::Hotel,
            "factory" => UsageCategory::Factory,
            _ => UsageCategory::Unknown,
        })
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            UsageCategory::Office => "office",
            UsageCategory::Retail => "retail",
            UsageCategory::Kitchen => "kitchen",
            UsageCategory::Storage => "storage",
            UsageCategory::Residential => "residential",
            UsageCategory::Corridor => "corridor",
            UsageCategory::Parking => "parking",
            UsageCategory::Laboratory => "laboratory",
            UsageCategory::Server => "server",
            UsageCategory::Workshop => "workshop",
            UsageCategory::Hotel => "hotel",
            UsageCategory::Factory => "factory",
            UsageCategory::Unknown => "unknown",
        }
    }
}

/// Dominant fuel/ignition hazard class (BIS fire classification)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FireRiskClass {
    /// Ordinary combustibles (wood, paper, textiles)
    A,
    /// Flammable liquids
    B,
    /// Electrical equipment
    C,
    /// Combustible metals
    D,
    /// Lithium-ion batteries
    E,
    /// Cooking oils and fats
    F,
    /// Multiple hazard types
    #[serde(rename = "mixed")]
    Mixed,
}

impl FireRiskClass {
    /// Human-readable description of the risk class
    pub fn description(&self) -> &'static str {
        match self {
            FireRiskClass::A => "Class A - Ordinary combustibles (wood, paper, textiles)",
            FireRiskClass::B => "Class B - Flammable liquids",
            FireRiskClass::C => "Class C - Electrical equipment",
            FireRiskClass::D => "Class D - Combustible metals",
            FireRiskClass::E => "Class E - Lithium-ion batteries",
            FireRiskClass::F => "Class F - Cooking oils and fats",
            FireRiskClass::Mixed => "Mixed - Multiple hazard types",
        }
    }
}

impl std::str::FromStr for FireRiskClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(FireRiskClass::A),
            "b" => Ok(FireRiskClass::B),
            "c" => Ok(FireRiskClass::C),
            "d" => Ok(FireRiskClass::D),
            "e" => Ok(FireRiskClass::E),
            "f" => Ok(FireRiskClass::F),
            "mixed" => Ok(FireRiskClass::Mixed),
            other => Err(Error::InvalidInput(format!(
                "unrecognized fire risk class: '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for FireRiskClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FireRiskClass::Mixed => write!(f, "mixed"),
            other => write!(f, "{:?}", other),
        }
    }
}
