//! MapColor - Graph Coloring Search in Rust
//!
//! Colors the regions of a map so that no two adjacent regions share a
//! color, and records every decision the search makes.
//!
//! # Example
//!
//! ```rust
//! use mapcolor::prelude::*;
//!
//! let problem = ColoringProblem::new(
//!     ["A", "B", "C"],
//!     [["A", "B"], ["B", "C"]],
//!     ["red", "blue"],
//! );
//!
//! let result = mapcolor::solve(&problem, StrategyKind::Backtracking).unwrap();
//! assert!(result.success);
//! assert_eq!(result.final_coloring.get("B"), Some("blue"));
//! ```

// Problem and result types
pub use mapcolor_core::{
    AbortReason, AdjacencyIndex, Color, Coloring, ColoringError, ColoringProblem, Palette, Region,
    RegionOrder, Result, SolverResult, Step, StepKind, StrategyKind,
};

// Configuration
pub use mapcolor_config::{ConfigError, SolverConfig};

// Strategies
pub use mapcolor_solver::{
    BacktrackingSolver, ColoringStrategy, ForwardCheckingSolver, GreedySolver, Solver, Strategy,
};

#[cfg(feature = "console")]
pub use mapcolor_console as console;

mod solve;
pub use solve::{load_config_or_default, solve, solve_by_name, solve_with_config, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        ColoringProblem, ColoringStrategy, RegionOrder, SolverConfig, SolverResult, StepKind,
        StrategyKind,
    };
}
