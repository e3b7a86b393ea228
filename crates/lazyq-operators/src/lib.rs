#![forbid(unsafe_code)]
//! lazyq-operators: lazy, composable query operators over any iterator.
//!
//! Design intent:
//! - `Seq<I>` wraps an iterator; every operator is an inherent method on it,
//!   so operators shadow the same-named `Iterator` methods while `Seq` stays
//!   usable in `for` loops and with std adapters.
//! - Streaming operators pull one source element per output element.
//!   Buffering operators (sort, group, join, except/intersect, skip_last,
//!   take_last, reverse) do nothing until the first `next()`.
//! - Fallible terminal operators return `lazyq_core::Result` and never a
//!   sentinel value.

pub mod aggregate;
pub mod element;
pub mod filter;
pub mod generate;
pub mod group;
pub mod join;
pub mod map;
pub mod partition;
pub mod seq;
pub mod set;
pub mod sort;
pub mod trace;
pub mod traits;

pub use generate::{empty, range, repeat};
pub use group::Grouping;
pub use lazyq_core::error::{QueryError, Result};
pub use seq::Seq;
pub use traits::{Comparer, IntoSeq};
