//! Building description type definitions

use serde::{Deserialize, Serialize};

use super::{FireRiskClass, UsageCategory};
use crate::service::unit_converter;
use firequote_types::Result;

/// Area unit system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Meters,
    Feet,
}

impl std::str::FromStr for Unit {
    type Err = firequote_types::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meters" | "m" | "sqm" | "m2" => Ok(Unit::Meters),
            "feet" | "ft" | "sqft" | "ft2" => Ok(Unit::Feet),
            other => Err(firequote_types::Error::InvalidInput(format!(
                "unrecognized unit: '{}'",
                other
            ))),
        }
    }
}

/// A single floor of the building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    /// 1-based floor number, contiguous within a building
    pub number: u32,
    /// Area as entered, in `unit`
    pub raw_area: f64,
    pub unit: Unit,
    pub usage: UsageCategory,
}

impl Floor {
    /// Floor area normalized to square meters
    pub fn area_in_meters(&self) -> Result<f64> {
        unit_converter::to_square_meters(self.raw_area, self.unit)
    }
}

/// Caller-supplied building description
///
/// Building type and height are opaque passthrough metadata; they are not
/// used in the calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingDescription {
    pub floors: Vec<Floor>,
    pub fire_risk: FireRiskClass,
    #[serde(default)]
    pub building_type: Option<String>,
    #[serde(default)]
    pub building_height: Option<String>,
}

impl BuildingDescription {
    pub fn new(fire_risk: FireRiskClass) -> Self {
        Self {
            floors: Vec::new(),
            fire_risk,
            building_type: None,
            building_height: None,
        }
    }

    /// Append a floor with the next contiguous number
    pub fn add_floor(&mut self, raw_area: f64, unit: Unit, usage: UsageCategory) {
        let number = self.floors.len() as u32 + 1;
        self.floors.push(Floor {
            number,
            raw_area,
            unit,
            usage,
        });
    }

    /// Remove a floor by number and renumber the remainder contiguously,
    /// preserving the order of the remaining floors
    pub fn remove_floor(&mut self, number: u32) {
        self.floors.retain(|f| f.number != number);
        for (i, floor) in self.floors.iter_mut().enumerate() {
            floor.number = i as u32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_floor_numbers_contiguously() {
        let mut building = BuildingDescription::new(FireRiskClass::Mixed);
        building.add_floor(120.0, Unit::Meters, UsageCategory::Office);
        building.add_floor(80.0, Unit::Meters, UsageCategory::Kitchen);
        building.add_floor(200.0, Unit::Feet, UsageCategory::Storage);
        let numbers: Vec<u32> = building.floors.iter().map(|f| f.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_floor_renumbers() {
        let mut building = BuildingDescription::new(FireRiskClass::Mixed);
        building.add_floor(120.0, Unit::Meters, UsageCategory::Office);
        building.add_floor(80.0, Unit::Meters, UsageCategory::Kitchen);
        building.add_floor(200.0, Unit::Meters, UsageCategory::Storage);
        building.remove_floor(2);
        let numbers: Vec<u32> = building.floors.iter().map(|f| f.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        // Order preserved: the old floor 3 (storage) is now floor 2
        assert_eq!(building.floors[1].usage, UsageCategory::Storage);
    }

    #[test]
    fn test_area_in_meters_for_feet_floor() {
        let floor = Floor {
            number: 1,
            raw_area: 1000.0,
            unit: Unit::Feet,
            usage: UsageCategory::Office,
        };
        let area = floor.area_in_meters().unwrap();
        assert!((area - 92.90304).abs() < 1e-9);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("meters".parse::<Unit>().unwrap(), Unit::Meters);
        assert_eq!("SQFT".parse::<Unit>().unwrap(), Unit::Feet);
        assert!("acres".parse::<Unit>().is_err());
    }
}
