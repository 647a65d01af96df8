//! MapColor Solver
//!
//! This crate provides the search side of the engine:
//! - [`SearchScope`] per-call state with scope-guarded assignments
//! - Strategies: backtracking, greedy and forward checking
//! - Termination conditions (step budget, time limit)
//! - [`Solver`] wiring a [`SolverConfig`](mapcolor_config::SolverConfig) to a strategy

pub mod scope;
pub mod solver;
pub mod strategy;
pub mod termination;

pub use scope::{Assignment, SearchScope};
pub use solver::{run_search, Solver};
pub use strategy::{
    BacktrackingSolver, ColoringStrategy, ForwardCheckingSolver, GreedySolver, Strategy,
};
pub use termination::{StepCountTermination, Termination, TimeTermination};
