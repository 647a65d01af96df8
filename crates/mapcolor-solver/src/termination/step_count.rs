//! Step count termination.

use mapcolor_core::AbortReason;

use super::Termination;
use crate::scope::SearchScope;

/// Terminates once the trace holds `limit` steps.
///
/// # Example
///
/// ```
/// use mapcolor_solver::termination::StepCountTermination;
///
/// // Record at most 1000 steps
/// let term = StepCountTermination::new(1000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, scope: &SearchScope<'_>) -> bool {
        scope.step_count() >= self.limit
    }

    fn reason(&self) -> AbortReason {
        AbortReason::StepCountLimit
    }
}
