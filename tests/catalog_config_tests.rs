//! Catalog loading and environment-driven config.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use lazyq_core::catalog::{load_catalog, parse_csv, parse_json, parse_yaml};
use lazyq_core::config::{OutputFormat, TutorialConfig};
use lazyq_core::error::CatalogError;
use lazyq_core::record::Product;

fn temp_catalog(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("lazyq-catalog-tests-{name}"));
    fs::write(&path, contents).unwrap();
    path
}

fn expected() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", "Electronics", 1200.0),
        Product::new(6, "Notebook", "Stationery", 5.0),
    ]
}

#[test]
fn test_parse_json() {
    let text = r#"[
        {"id": 1, "name": "Laptop", "category": "Electronics", "price": 1200.0},
        {"id": 6, "name": "Notebook", "category": "Stationery", "price": 5.0}
    ]"#;
    assert_eq!(parse_json(text).unwrap(), expected());
}

#[test]
fn test_parse_yaml() {
    let text = "
- id: 1
  name: Laptop
  category: Electronics
  price: 1200.0
- id: 6
  name: Notebook
  category: Stationery
  price: 5.0
";
    assert_eq!(parse_yaml(text).unwrap(), expected());
}

#[test]
fn test_parse_csv() {
    let text = "id,name,category,price\n1, Laptop, Electronics, 1200\n6,Notebook,Stationery,5.00\n";
    assert_eq!(parse_csv(text).unwrap(), expected());
}

#[test]
fn test_parse_errors() {
    assert!(matches!(parse_json("{"), Err(CatalogError::Json(_))));
    assert!(matches!(
        parse_csv("id,name,category,price\nx,Laptop,Electronics,1\n"),
        Err(CatalogError::Csv(_))
    ));
}

#[test]
fn test_load_catalog_by_extension() {
    let path = temp_catalog(
        "load.csv",
        "id,name,category,price\n1,Laptop,Electronics,1200\n6,Notebook,Stationery,5\n",
    );
    assert_eq!(load_catalog(&path).unwrap(), expected());

    let path = temp_catalog("load.txt", "whatever");
    assert!(matches!(
        load_catalog(&path),
        Err(CatalogError::UnsupportedFormat(ext)) if ext == "txt"
    ));

    let mut missing = std::env::temp_dir();
    missing.push("lazyq-catalog-tests-does-not-exist.json");
    assert!(matches!(load_catalog(&missing), Err(CatalogError::Io(_))));
}

#[test]
fn test_config_defaults() {
    let cfg = TutorialConfig::from_lookup(|_| None);
    assert_eq!(cfg, TutorialConfig::default());
    assert_eq!(cfg.output, OutputFormat::Text);
    assert_eq!(cfg.name_separator, "/ ");
    assert!(cfg.wants_section("WHERE"));
}

#[test]
fn test_config_from_lookup() {
    let vars: HashMap<&str, &str> = [
        ("LAZYQ_CATALOG", "products.yaml"),
        ("LAZYQ_SECTIONS", " where, OrderBy ,,"),
        ("LAZYQ_OUTPUT", "JSON"),
        ("LAZYQ_NAME_SEPARATOR", ", "),
    ]
    .into_iter()
    .collect();
    let cfg = TutorialConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(cfg.catalog_path.as_deref(), Some("products.yaml"));
    assert_eq!(cfg.sections, vec!["where", "OrderBy"]);
    assert_eq!(cfg.output, OutputFormat::Json);
    assert_eq!(cfg.name_separator, ", ");

    assert!(cfg.wants_section("WHERE"));
    assert!(cfg.wants_section("ORDERBY"));
    assert!(!cfg.wants_section("JOIN"));
}

#[test]
fn test_config_ignores_invalid_values() {
    let cfg = TutorialConfig::from_lookup(|key| match key {
        "LAZYQ_OUTPUT" => Some("xml".to_string()),
        "LAZYQ_CATALOG" => Some("   ".to_string()),
        _ => None,
    });
    assert_eq!(cfg.output, OutputFormat::Text);
    assert!(cfg.catalog_path.is_none());
}
