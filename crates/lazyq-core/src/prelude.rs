//! Convenient re-exports for downstream crates.

pub use crate::config::{OutputFormat, TutorialConfig};
pub use crate::error::{CatalogError, QueryError, Result};
pub use crate::id::ProductId;
pub use crate::numeric::Numeric;
pub use crate::record::{additional_products, sample_catalog, Product};
