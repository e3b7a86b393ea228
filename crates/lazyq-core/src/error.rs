use thiserror::Error;

/// Canonical result for query operators.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Failures an operator can signal instead of returning a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No element matched where exactly one (or at least one) was required.
    #[error("no matching element: {0}")]
    NotFound(String),

    /// More than one element matched where at most one was expected.
    /// `count` is a lower bound; evaluation stops at the second match.
    #[error("{operator}: sequence contains more than one matching element (at least {count})")]
    MultipleMatches {
        operator: &'static str,
        count: usize,
    },

    /// An aggregate that needs at least one element ran on empty input.
    #[error("{0}: sequence contains no elements")]
    EmptySequence(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl QueryError {
    pub fn not_found(context: impl Into<String>) -> Self {
        QueryError::NotFound(context.into())
    }

    pub fn multiple(operator: &'static str) -> Self {
        QueryError::MultipleMatches { operator, count: 2 }
    }
}

/// Errors raised while loading a product catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}
