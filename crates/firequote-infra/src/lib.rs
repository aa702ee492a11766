//! Infrastructure layer - building and catalog file loaders

pub mod building_csv;
pub mod building_json;
pub mod catalog_json;

pub use building_csv::load_floors_from_csv;
pub use building_json::load_building_from_json;
pub use catalog_json::load_catalog_from_json;
