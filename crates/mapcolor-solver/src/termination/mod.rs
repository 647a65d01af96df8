//! Search budgets.
//!
//! Checked before every candidate color is tried. A firing termination cuts
//! the search short and the result carries its [`AbortReason`].

mod step_count;
mod time;

use std::fmt::Debug;

use mapcolor_config::SolverConfig;
use mapcolor_core::AbortReason;

use crate::scope::SearchScope;

pub use step_count::StepCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns true if searching should stop.
    fn is_terminated(&self, scope: &SearchScope<'_>) -> bool;

    /// The reason reported when this termination fires.
    fn reason(&self) -> AbortReason;
}

/// Builds the terminations a configuration asks for.
pub fn from_config(config: &SolverConfig) -> Vec<Box<dyn Termination>> {
    let mut terminations: Vec<Box<dyn Termination>> = Vec::new();
    if let Some(limit) = config.step_count_limit() {
        terminations.push(Box::new(StepCountTermination::new(limit)));
    }
    if let Some(limit) = config.time_limit() {
        terminations.push(Box::new(TimeTermination::new(limit)));
    }
    terminations
}
