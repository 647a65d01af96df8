//! Solver entry point.
//!
//! Logging levels:
//! - **INFO**: Solve start/end with problem scale and outcome
//! - **DEBUG**: Backtracks and aborted searches
//! - **TRACE**: Every recorded step

use std::time::Instant;

use mapcolor_config::SolverConfig;
use mapcolor_core::{AbortReason, ColoringProblem, Result, SolverResult, StrategyKind};
use tracing::info;

use crate::scope::SearchScope;
use crate::strategy::{ColoringStrategy, Strategy};
use crate::termination::{self, Termination};

/// Runs `strategy` on a fresh scope for `problem`.
///
/// Input errors surface before any step is recorded. An exhausted or
/// aborted search is an `Ok` result with `success == false`.
pub fn run_search<St>(
    strategy: &St,
    problem: &ColoringProblem,
    terminations: Vec<Box<dyn Termination>>,
) -> Result<SolverResult>
where
    St: ColoringStrategy + ?Sized,
{
    let start = Instant::now();
    let mut scope = SearchScope::new(problem)?.with_terminations(terminations);
    let strategy_kind = strategy.kind();

    info!(
        event = "solve_start",
        strategy = %strategy_kind,
        region_count = problem.region_count() as u64,
        adjacency_count = problem.adjacencies.len() as u64,
        color_count = problem.color_count() as u64,
        "Solving started"
    );

    let success = strategy.search(&mut scope);
    let result = scope.into_result(success);

    info!(
        event = "solve_end",
        strategy = %strategy_kind,
        success = result.success,
        steps = result.total_steps,
        backtracks = result.backtracks,
        duration_ms = start.elapsed().as_millis() as u64,
        aborted = result.aborted.map(AbortReason::as_str),
        "Solving ended"
    );

    Ok(result)
}

/// Configured solver.
///
/// Holds no search state; every [`solve`](Self::solve) call builds its own.
///
/// # Example
///
/// ```
/// use mapcolor_config::SolverConfig;
/// use mapcolor_core::{ColoringProblem, StrategyKind};
/// use mapcolor_solver::Solver;
///
/// let problem = ColoringProblem::new(["A", "B", "C"], [["A", "B"], ["B", "C"]], ["red", "blue"]);
/// let solver = Solver::new(SolverConfig::default());
///
/// let result = solver.solve(&problem, StrategyKind::Greedy).unwrap();
/// assert!(result.success);
/// assert_eq!(result.backtracks, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves with the given strategy.
    pub fn solve(&self, problem: &ColoringProblem, kind: StrategyKind) -> Result<SolverResult> {
        let strategy = Strategy::from_kind(kind, self.config.region_order);
        run_search(&strategy, problem, termination::from_config(&self.config))
    }

    /// Solves with the configured default strategy.
    pub fn solve_default(&self, problem: &ColoringProblem) -> Result<SolverResult> {
        self.solve(problem, self.config.default_strategy)
    }
}
