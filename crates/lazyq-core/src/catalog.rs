//! Load a product catalog from JSON, YAML, or CSV.
//!
//! The format is picked from the file extension:
//! - `.json`: array of products
//! - `.yaml` / `.yml`: sequence of products
//! - `.csv`: header `id,name,category,price`

use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::record::Product;

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>, CatalogError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" => parse_json(&fs::read_to_string(path)?),
        "yaml" | "yml" => parse_yaml(&fs::read_to_string(path)?),
        "csv" => parse_csv(&fs::read_to_string(path)?),
        other => Err(CatalogError::UnsupportedFormat(if other.is_empty() {
            path.display().to_string()
        } else {
            other.to_string()
        })),
    }
}

pub fn parse_json(text: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(text)?)
}

pub fn parse_yaml(text: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_yaml::from_str(text)?)
}

pub fn parse_csv(text: &str) -> Result<Vec<Product>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let mut products = Vec::new();
    for row in reader.deserialize() {
        products.push(row?);
    }
    Ok(products)
}
