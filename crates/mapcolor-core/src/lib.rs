//! MapColor Core - Core types for graph-coloring search
//!
//! This crate provides the pieces every strategy shares:
//! - Problem description types (regions, adjacencies, palettes)
//! - [`AdjacencyIndex`] for neighbor lookup
//! - [`Coloring`] partial assignment state
//! - [`StepRecorder`] and [`Step`] for the search trace
//! - [`SolverResult`] as the uniform output

pub mod adjacency;
pub mod coloring;
pub mod domain;
pub mod error;
pub mod result;
pub mod step;

pub use adjacency::{AdjacencyIndex, MalformedAdjacency};
pub use coloring::Coloring;
pub use domain::{
    Color, ColoringProblem, Palette, Region, RegionOrder, StrategyKind, DEFAULT_LABEL_PREFIX,
    DEFAULT_MAX_COLORS,
};
pub use error::{ColoringError, Result};
pub use result::{AbortReason, SolverResult};
pub use step::{Step, StepKind, StepRecorder};
