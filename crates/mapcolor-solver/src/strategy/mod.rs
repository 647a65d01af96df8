//! Search strategies.
//!
//! Every strategy implements [`ColoringStrategy`]: it owns its search policy
//! and drives the shared [`SearchScope`]. [`Strategy`] is the closed set of
//! strategies selectable by [`StrategyKind`].

mod backtracking;
mod forward_checking;
mod greedy;

use std::fmt::Debug;

use mapcolor_core::{ColoringProblem, RegionOrder, Result, SolverResult, StrategyKind};

use crate::scope::SearchScope;
use crate::solver::run_search;

pub use backtracking::BacktrackingSolver;
pub use forward_checking::ForwardCheckingSolver;
pub use greedy::GreedySolver;

/// A search policy over the shared scope.
pub trait ColoringStrategy: Send + Debug {
    /// Searches for a complete coloring.
    ///
    /// Returns true when every region holds a color. Returning false means
    /// the search was exhausted, or cut short if the scope is aborted.
    fn search(&self, scope: &mut SearchScope<'_>) -> bool;

    /// Which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Solves `problem` without a search budget.
    fn solve(&self, problem: &ColoringProblem) -> Result<SolverResult>
    where
        Self: Sized,
    {
        run_search(self, problem, Vec::new())
    }
}

/// The closed set of strategies behind one entry point.
///
/// # Example
///
/// ```
/// use mapcolor_core::{ColoringProblem, RegionOrder, StrategyKind};
/// use mapcolor_solver::{ColoringStrategy, Strategy};
///
/// let problem = ColoringProblem::new(
///     ["A", "B", "C"],
///     [["A", "B"], ["B", "C"], ["A", "C"]],
///     ["red", "blue", "green"],
/// );
///
/// let strategy = Strategy::from_kind(StrategyKind::ForwardChecking, RegionOrder::Declared);
/// let result = strategy.solve(&problem).unwrap();
/// assert!(result.success);
/// ```
#[derive(Debug, Clone)]
pub enum Strategy {
    Backtracking(BacktrackingSolver),
    Greedy(GreedySolver),
    ForwardChecking(ForwardCheckingSolver),
}

impl Strategy {
    /// Creates the strategy for `kind`.
    ///
    /// `order` applies to the backtracking searches; greedy always orders
    /// by degree.
    pub fn from_kind(kind: StrategyKind, order: RegionOrder) -> Self {
        match kind {
            StrategyKind::Backtracking => {
                Strategy::Backtracking(BacktrackingSolver::new().with_order(order))
            }
            StrategyKind::Greedy => Strategy::Greedy(GreedySolver::new()),
            StrategyKind::ForwardChecking => {
                Strategy::ForwardChecking(ForwardCheckingSolver::new().with_order(order))
            }
        }
    }
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        Strategy::from_kind(kind, RegionOrder::default())
    }
}

impl ColoringStrategy for Strategy {
    fn search(&self, scope: &mut SearchScope<'_>) -> bool {
        match self {
            Strategy::Backtracking(solver) => solver.search(scope),
            Strategy::Greedy(solver) => solver.search(scope),
            Strategy::ForwardChecking(solver) => solver.search(scope),
        }
    }

    fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Backtracking(solver) => solver.kind(),
            Strategy::Greedy(solver) => solver.kind(),
            Strategy::ForwardChecking(solver) => solver.kind(),
        }
    }
}
