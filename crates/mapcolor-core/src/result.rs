//! The uniform output of every strategy.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coloring::Coloring;
use crate::step::{Step, StepKind, StepRecorder};

/// Why a search stopped before reaching a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AbortReason {
    /// The configured step budget was used up.
    StepCountLimit,
    /// The configured wall-clock limit elapsed.
    TimeLimit,
}

impl AbortReason {
    pub fn as_str(self) -> &'static str {
        match self {
            AbortReason::StepCountLimit => "step_count_limit",
            AbortReason::TimeLimit => "time_limit",
        }
    }
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one solve call.
///
/// `success == false` with `aborted == None` is a legitimate negative answer
/// (the search was exhausted), not a failure of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverResult {
    pub success: bool,
    pub steps: Vec<Step>,
    /// Complete coloring on success, empty otherwise.
    pub final_coloring: Coloring,
    pub total_steps: u64,
    pub backtracks: u64,
    /// Non-fatal input problems, such as dropped adjacencies.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub warnings: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub aborted: Option<AbortReason>,
}

impl SolverResult {
    /// Assembles a result from the final search state.
    ///
    /// The coloring is discarded unless `success` is true so callers never
    /// see a partial assignment.
    pub fn from_search(success: bool, recorder: StepRecorder, coloring: Coloring) -> Self {
        let backtracks = recorder.backtrack_count();
        let steps = recorder.into_steps();
        Self {
            success,
            total_steps: steps.len() as u64,
            backtracks,
            steps,
            final_coloring: if success { coloring } else { Coloring::new() },
            warnings: Vec::new(),
            aborted: None,
        }
    }

    /// Result of a problem without regions.
    pub fn trivial() -> Self {
        Self::from_search(true, StepRecorder::new(), Coloring::new())
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Marks the result as cut short.
    pub fn aborted(mut self, reason: AbortReason) -> Self {
        self.success = false;
        self.final_coloring.clear();
        self.aborted = Some(reason);
        self
    }

    /// Number of steps of the given kind.
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind == kind).count()
    }

    /// True if the search ran to a terminal state.
    pub fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }
}
