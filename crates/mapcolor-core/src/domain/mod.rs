//! Problem description types.
//!
//! - [`ColoringProblem`]: regions, adjacency pairs and palette of one solve call
//! - [`Palette`]: explicit or synthesized color labels
//! - [`StrategyKind`]: the closed set of search strategies
//! - [`RegionOrder`]: the variable ordering used by the search

mod palette;
mod problem;
mod strategy;

#[cfg(test)]
mod tests;

pub use palette::{Palette, DEFAULT_LABEL_PREFIX, DEFAULT_MAX_COLORS};
pub use problem::ColoringProblem;
pub use strategy::{RegionOrder, StrategyKind};

/// Opaque region identifier.
pub type Region = String;

/// Opaque color identifier.
pub type Color = String;
