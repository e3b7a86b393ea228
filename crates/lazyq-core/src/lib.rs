#![forbid(unsafe_code)]
//! lazyq-core: shared vocabulary for the lazyq workspace.
//!
//! Holds the error taxonomy every operator reports through, the numeric
//! widening used by averages, the example `Product` record with its catalog
//! loaders, and the tutorial configuration. No operator code lives here.

pub mod catalog;
pub mod config;
pub mod error;
pub mod id;
pub mod numeric;
pub mod prelude;
pub mod record;

pub use error::{QueryError, Result};
