//! JSON loader for full building descriptions

use std::path::Path;

use firequote_domain::model::BuildingDescription;
use firequote_types::{Error, Result};

/// Load a building description from a JSON file
pub fn load_building_from_json(path: &Path) -> Result<BuildingDescription> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let building: BuildingDescription = serde_json::from_str(&content)?;
    Ok(building)
}
