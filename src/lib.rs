#![forbid(unsafe_code)]
//! lazyq: lazy, composable query operators over in-memory sequences.
//!
//! Facade over the workspace crates:
//! - [`lazyq_core`]: errors, numeric widening, the `Product` record, config
//! - [`lazyq_operators`]: the `Seq` query library
//!
//! ```
//! use lazyq::prelude::*;
//!
//! let cheap: Vec<String> = sample_catalog()
//!     .into_seq()
//!     .filter(|p| p.price < 200.0)
//!     .sort_by(|p| p.price)
//!     .map(|p| p.name)
//!     .to_list();
//! assert_eq!(cheap, vec!["Notebook", "Chair"]);
//! ```

pub use lazyq_core;
pub use lazyq_operators;

pub mod prelude {
    pub use lazyq_core::prelude::{
        additional_products, sample_catalog, Numeric, OutputFormat, Product, ProductId, QueryError,
        TutorialConfig,
    };
    pub use lazyq_operators::{empty, range, repeat, Grouping, IntoSeq, Seq};
}
