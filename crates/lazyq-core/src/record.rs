//! The example record the tutorial queries over.

use serde::{Deserialize, Serialize};

use crate::id::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category: category.into(),
            price,
        }
    }

    /// A placeholder product carrying only a name (id 0, no category, zero price).
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(0, name, String::new(), 0.0)
    }
}

/// The built-in six-product catalog.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", "Electronics", 1200.00),
        Product::new(2, "Smartphone", "Electronics", 800.00),
        Product::new(3, "Desk", "Furniture", 300.00),
        Product::new(4, "Chair", "Furniture", 150.00),
        Product::new(5, "Headphones", "Electronics", 200.00),
        Product::new(6, "Notebook", "Stationery", 5.00),
    ]
}

/// Products appended to the catalog by the ADDRANGE step.
pub fn additional_products() -> Vec<Product> {
    vec![
        Product::new(7, "Tablet", "Electronics", 600.00),
        Product::new(8, "Mouse", "Electronics", 50.00),
    ]
}
