//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use lazyq_core::record::{additional_products, sample_catalog, Product};

/// The eight-product catalog the tutorial works on after ADDRANGE.
pub fn full_catalog() -> Vec<Product> {
    let mut products = sample_catalog();
    products.extend(additional_products());
    products
}

/// A catalog with 4 Electronics, 2 Furniture, 1 Stationery.
pub fn seven_products() -> Vec<Product> {
    let mut products = sample_catalog();
    products.push(Product::new(7, "Tablet", "Electronics", 600.0));
    products
}

pub fn names<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<String> {
    products.into_iter().map(|p| p.name.clone()).collect()
}
