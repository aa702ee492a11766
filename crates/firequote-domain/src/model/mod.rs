//! Domain model types

pub mod building;
pub mod hazard;
pub mod product;
pub mod quotation;
pub mod standard;

pub use building::{BuildingDescription, Floor, Unit};
pub use hazard::{FireRiskClass, HazardLevel, UsageCategory};
pub use product::{AgentType, ExtinguisherProduct, ProductCatalog};
pub use quotation::{FloorResult, LineItem, Quotation, TAX_RATE};
pub use standard::{HazardStandard, HazardStandards};
