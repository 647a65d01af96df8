//! Solve entry points that hide the solver wiring.

use std::io::ErrorKind;
use std::path::Path;

use mapcolor_config::{ConfigError, SolverConfig};
use mapcolor_core::{ColoringProblem, Result, SolverResult, StrategyKind};
use mapcolor_solver::Solver;
use tracing::warn;

/// Configuration file picked up by [`solve`] from the working directory.
pub const CONFIG_FILE: &str = "mapcolor.toml";

/// Solves `problem` with `kind`.
///
/// Reads [`CONFIG_FILE`] if present and falls back to defaults otherwise.
pub fn solve(problem: &ColoringProblem, kind: StrategyKind) -> Result<SolverResult> {
    let config = load_config_or_default(CONFIG_FILE);
    solve_with_config(problem, kind, &config)
}

/// Loads a TOML configuration, falling back to defaults.
///
/// A missing file is silent; an unreadable or invalid one is logged.
pub fn load_config_or_default(path: impl AsRef<Path>) -> SolverConfig {
    let path = path.as_ref();
    match SolverConfig::load(path) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => SolverConfig::default(),
        Err(err) => {
            warn!(
                event = "config_rejected",
                path = %path.display(),
                error = %err,
            );
            SolverConfig::default()
        }
    }
}

/// Solves `problem` with `kind` under an explicit configuration.
pub fn solve_with_config(
    problem: &ColoringProblem,
    kind: StrategyKind,
    config: &SolverConfig,
) -> Result<SolverResult> {
    #[cfg(feature = "console")]
    mapcolor_console::init();

    Solver::new(config.clone()).solve(problem, kind)
}

/// Solves with the strategy named `algorithm`.
///
/// # Errors
///
/// Returns `UnsupportedStrategy` for names outside
/// `backtracking`, `greedy`, `forward_checking`, before looking at the
/// problem.
pub fn solve_by_name(
    problem: &ColoringProblem,
    algorithm: &str,
    config: &SolverConfig,
) -> Result<SolverResult> {
    let kind: StrategyKind = algorithm.parse()?;
    solve_with_config(problem, kind, config)
}
