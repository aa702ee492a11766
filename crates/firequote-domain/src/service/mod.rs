//! Domain services - pure calculation functions

pub mod floor_calculator;
pub mod hazard_classifier;
pub mod quotation_builder;
pub mod unit_converter;

pub use floor_calculator::{agent_for_risk, compute_floor_requirement};
pub use hazard_classifier::classify;
pub use quotation_builder::{build_quotation, generate_quotation_report, STAND_UNIT_COST};
pub use unit_converter::{from_square_meters, to_square_meters, SQFT_TO_SQM};
