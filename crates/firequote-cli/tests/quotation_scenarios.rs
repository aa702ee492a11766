//! End-to-end quotation scenarios through the app and infra layers

use std::io::Write;

use firequote_app::app::{prepare_quotation, prepare_quotation_with_defaults};
use firequote_app::constants::{bis_standards, default_catalog};
use firequote_domain::model::{AgentType, BuildingDescription, FireRiskClass, Unit, UsageCategory};
use firequote_infra::{load_building_from_json, load_floors_from_csv};

#[test]
fn office_floor_gets_minimum_two_units() {
    // 250 m² office, mixed risk: coverage and travel bounds both give 1,
    // the minimum-floor rule lifts the count to 2
    let mut building = BuildingDescription::new(FireRiskClass::Mixed);
    building.add_floor(250.0, Unit::Meters, UsageCategory::Office);

    let quotation = prepare_quotation_with_defaults(&building).unwrap();
    assert_eq!(quotation.total_extinguishers, 2);
    assert_eq!(quotation.floor_results[0].agent_type, AgentType::AbcPowder);
}

#[test]
fn kitchen_floor_overrides_declared_risk() {
    let mut building = BuildingDescription::new(FireRiskClass::A);
    building.add_floor(80.0, Unit::Meters, UsageCategory::Kitchen);

    let quotation = prepare_quotation_with_defaults(&building).unwrap();
    let fr = &quotation.floor_results[0];
    assert_eq!(fr.extinguishers_required, 1);
    assert_eq!(fr.agent_type, AgentType::WetChemical);
    assert_eq!(fr.recommended_capacity, "6 LTR");
}

#[test]
fn empty_building_is_invalid_input() {
    let building = BuildingDescription::new(FireRiskClass::Mixed);
    assert!(prepare_quotation_with_defaults(&building).is_err());
}

#[test]
fn tax_is_rounded_once_from_the_subtotal() {
    // 10000 subtotal → 1800 tax → 11800 grand total, no per-line drift
    let mut building = BuildingDescription::new(FireRiskClass::Mixed);
    building.add_floor(250.0, Unit::Meters, UsageCategory::Office);
    let quotation = prepare_quotation_with_defaults(&building).unwrap();

    let expected_subtotal: i64 = quotation.line_items.iter().map(|i| i.subtotal).sum();
    assert_eq!(quotation.subtotal_excl_tax, expected_subtotal);
    assert_eq!(
        quotation.tax_amount,
        (expected_subtotal * 18 + 50) / 100
    );
    assert_eq!(
        quotation.grand_total,
        quotation.subtotal_excl_tax + quotation.tax_amount
    );
}

#[test]
fn quotation_from_csv_floor_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"floor_no,area,unit,usage\n1,250,meters,office\n2,80,meters,kitchen\n")
        .unwrap();

    let mut building = BuildingDescription::new(FireRiskClass::Mixed);
    building.floors = load_floors_from_csv(file.path()).unwrap();

    let quotation = prepare_quotation(&building, bis_standards(), default_catalog()).unwrap();
    assert_eq!(quotation.total_extinguishers, 3);
    // ABC group, wet chemical group, stand line - in floor order
    assert_eq!(quotation.line_items.len(), 3);
    assert!(quotation.line_items[0].description.contains("ABC"));
    assert!(quotation.line_items[1].description.contains("Wet Chemical"));
    assert_eq!(quotation.line_items[2].description, "Wall mount stand");
}

#[test]
fn quotation_from_building_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "floors": [
                {"number": 1, "raw_area": 2690.978, "unit": "feet", "usage": "office"}
            ],
            "fire_risk": "C"
        }"#,
    )
    .unwrap();

    let building = load_building_from_json(file.path()).unwrap();
    let quotation = prepare_quotation_with_defaults(&building).unwrap();

    // ~250 m² office at class C risk: two CO2 units
    let fr = &quotation.floor_results[0];
    assert_eq!(fr.extinguishers_required, 2);
    assert_eq!(fr.agent_type, AgentType::Co2);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let mut building = BuildingDescription::new(FireRiskClass::Mixed);
    building.add_floor(250.0, Unit::Meters, UsageCategory::Office);
    building.add_floor(80.0, Unit::Meters, UsageCategory::Kitchen);
    building.add_floor(400.0, Unit::Meters, UsageCategory::Storage);

    let first = prepare_quotation_with_defaults(&building).unwrap();
    let second = prepare_quotation_with_defaults(&building).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn larger_area_never_needs_fewer_units() {
    let mut previous = 0;
    for area in [60.0, 120.0, 350.0, 700.0, 1500.0] {
        let mut building = BuildingDescription::new(FireRiskClass::Mixed);
        building.add_floor(area, Unit::Meters, UsageCategory::Office);
        let quotation = prepare_quotation_with_defaults(&building).unwrap();
        assert!(quotation.total_extinguishers >= previous);
        previous = quotation.total_extinguishers;
    }
}
