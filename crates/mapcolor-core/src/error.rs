//! Error types for MapColor

use thiserror::Error;

/// Main error type for coloring operations.
///
/// Every variant is detected before search begins, so a returned error never
/// leaves partial search state behind. An exhausted search is not an error:
/// it is reported as a [`SolverResult`](crate::SolverResult) with
/// `success == false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringError {
    /// An adjacency references a region missing from the region list.
    #[error("Unknown region '{region}' in adjacency #{position}")]
    UnknownRegion { region: String, position: usize },

    /// The requested strategy name is not implemented.
    #[error("Unsupported strategy: {0}")]
    UnsupportedStrategy(String),
}

/// Result type alias for coloring operations
pub type Result<T> = std::result::Result<T, ColoringError>;
