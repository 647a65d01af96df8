//! Search trace records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::coloring::Coloring;
use crate::domain::{Color, Region};

/// What happened at a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepKind {
    /// A color was placed on a region.
    Assign,
    /// A candidate color was rejected without descending.
    Conflict,
    /// An assignment was undone after its subtree failed.
    Backtrack,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Assign => write!(f, "assign"),
            StepKind::Conflict => write!(f, "conflict"),
            StepKind::Backtrack => write!(f, "backtrack"),
        }
    }
}

/// One immutable trace record.
///
/// `reason` is present for conflicts and backtracks and absent for
/// assignments. The field names on the wire are the ones visualizers
/// consume (`step_type`, `current_state`, `backtrack_reason`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    pub region: Region,
    pub color: Color,
    #[cfg_attr(feature = "serde", serde(rename = "step_type"))]
    pub kind: StepKind,
    #[cfg_attr(feature = "serde", serde(rename = "current_state"))]
    pub state: Coloring,
    #[cfg_attr(feature = "serde", serde(rename = "backtrack_reason"))]
    pub reason: Option<String>,
}

/// Appends steps to the trace; makes no decisions.
///
/// Each record method snapshots the coloring it is given, so later
/// mutations never leak into recorded steps.
///
/// # Example
///
/// ```
/// use mapcolor_core::{Coloring, StepKind, StepRecorder};
///
/// let mut coloring = Coloring::new();
/// let mut recorder = StepRecorder::new();
///
/// coloring.assign("A", "red");
/// recorder.record_assign("A", "red", &coloring);
/// coloring.unassign("A");
/// recorder.record_backtrack("A", "red", &coloring);
///
/// assert_eq!(recorder.len(), 2);
/// assert_eq!(recorder.backtrack_count(), 1);
/// assert_eq!(recorder.steps()[0].kind, StepKind::Assign);
/// assert_eq!(recorder.steps()[0].state.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
    backtracks: u64,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an assignment; `coloring` already holds it.
    pub fn record_assign(&mut self, region: &str, color: &str, coloring: &Coloring) {
        self.push(region, color, StepKind::Assign, coloring, None);
    }

    /// Records a rejected candidate color for `region`.
    pub fn record_conflict(&mut self, region: &str, color: &str, coloring: &Coloring) {
        let reason = format!("color {color} conflicts with an already colored neighbor");
        self.push(region, color, StepKind::Conflict, coloring, Some(reason));
    }

    /// Records that assigning `color` emptied the domain of `region`.
    pub fn record_domain_wipeout(&mut self, region: &str, color: &str, coloring: &Coloring) {
        let reason = format!("domain of {region} exhausted by color {color}");
        self.push(region, color, StepKind::Conflict, coloring, Some(reason));
    }

    /// Records an undone assignment; `coloring` no longer holds it.
    pub fn record_backtrack(&mut self, region: &str, color: &str, coloring: &Coloring) {
        self.backtracks += 1;
        let reason = format!("no consistent completion with color {color}");
        self.push(region, color, StepKind::Backtrack, coloring, Some(reason));
    }

    fn push(
        &mut self,
        region: &str,
        color: &str,
        kind: StepKind,
        coloring: &Coloring,
        reason: Option<String>,
    ) {
        trace!(
            event = "step",
            step = self.steps.len() as u64,
            %kind,
            region,
            color,
            assigned = coloring.len() as u64,
        );
        self.steps.push(Step {
            region: region.to_string(),
            color: color.to_string(),
            kind,
            state: coloring.snapshot(),
            reason,
        });
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of backtrack steps recorded.
    pub fn backtrack_count(&self) -> u64 {
        self.backtracks
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_has_no_reason() {
        let mut coloring = Coloring::new();
        let mut recorder = StepRecorder::new();
        coloring.assign("A", "red");
        recorder.record_assign("A", "red", &coloring);

        let step = &recorder.steps()[0];
        assert_eq!(step.kind, StepKind::Assign);
        assert!(step.reason.is_none());
    }

    #[test]
    fn test_conflict_and_backtrack_carry_reasons() {
        let coloring = Coloring::new();
        let mut recorder = StepRecorder::new();
        recorder.record_conflict("B", "red", &coloring);
        recorder.record_domain_wipeout("C", "blue", &coloring);
        recorder.record_backtrack("A", "green", &coloring);

        let reasons: Vec<_> = recorder
            .steps()
            .iter()
            .map(|s| s.reason.as_deref().unwrap())
            .collect();
        assert_eq!(
            reasons,
            [
                "color red conflicts with an already colored neighbor",
                "domain of C exhausted by color blue",
                "no consistent completion with color green",
            ]
        );
    }

    #[test]
    fn test_only_backtracks_are_counted() {
        let coloring = Coloring::new();
        let mut recorder = StepRecorder::new();
        recorder.record_conflict("A", "red", &coloring);
        recorder.record_assign("A", "blue", &coloring);
        recorder.record_domain_wipeout("B", "blue", &coloring);
        recorder.record_backtrack("A", "blue", &coloring);

        assert_eq!(recorder.len(), 4);
        assert_eq!(recorder.backtrack_count(), 1);
    }

    #[test]
    fn test_steps_snapshot_state() {
        let mut coloring = Coloring::new();
        let mut recorder = StepRecorder::new();
        coloring.assign("A", "red");
        recorder.record_assign("A", "red", &coloring);
        coloring.assign("B", "blue");
        recorder.record_assign("B", "blue", &coloring);
        coloring.clear();

        let steps = recorder.into_steps();
        assert_eq!(steps[0].state.len(), 1);
        assert_eq!(steps[1].state.len(), 2);
    }

    #[test]
    fn test_step_kind_display() {
        assert_eq!(StepKind::Assign.to_string(), "assign");
        assert_eq!(StepKind::Conflict.to_string(), "conflict");
        assert_eq!(StepKind::Backtrack.to_string(), "backtrack");
    }
}
