//! JSON loader for replacement product catalogs
//!
//! Lets a revised price list be supplied without touching calculation
//! logic; the file holds an array of products in ascending capacity order
//! per agent.

use std::path::Path;

use firequote_domain::model::{ExtinguisherProduct, ProductCatalog};
use firequote_types::{Error, Result};

/// Load a product catalog from a JSON file
pub fn load_catalog_from_json(path: &Path) -> Result<ProductCatalog> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let products: Vec<ExtinguisherProduct> = serde_json::from_str(&content)?;
    if products.is_empty() {
        return Err(Error::InvalidInput("catalog file has no products".to_string()));
    }
    Ok(ProductCatalog::new(products))
}
