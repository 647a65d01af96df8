//! Per-call search state.

use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

use mapcolor_core::{
    AbortReason, AdjacencyIndex, Color, Coloring, ColoringProblem, Region, Result, SolverResult,
    StepRecorder,
};
use tracing::debug;

use crate::termination::Termination;

/// Everything one solve call owns while searching.
///
/// A scope is created per call and consumed by
/// [`into_result`](Self::into_result); nothing in it outlives the call.
pub struct SearchScope<'p> {
    index: AdjacencyIndex,
    colors: &'p [Color],
    coloring: Coloring,
    recorder: StepRecorder,
    terminations: Vec<Box<dyn Termination>>,
    start_time: Instant,
    aborted: Option<AbortReason>,
}

impl<'p> SearchScope<'p> {
    /// Builds the adjacency index of `problem`.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownRegion` before any search state exists.
    pub fn new(problem: &'p ColoringProblem) -> Result<Self> {
        Ok(Self {
            index: AdjacencyIndex::build(&problem.regions, &problem.adjacencies)?,
            colors: &problem.colors,
            coloring: Coloring::new(),
            recorder: StepRecorder::new(),
            terminations: Vec::new(),
            start_time: Instant::now(),
            aborted: None,
        })
    }

    pub fn with_terminations(mut self, terminations: Vec<Box<dyn Termination>>) -> Self {
        self.terminations = terminations;
        self
    }

    pub fn index(&self) -> &AdjacencyIndex {
        &self.index
    }

    /// The palette, in trial order.
    pub fn colors(&self) -> &'p [Color] {
        self.colors
    }

    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    pub fn is_valid_color(&self, region: &str, color: &str) -> bool {
        self.coloring.is_valid_color(&self.index, region, color)
    }

    /// Colors held by the assigned neighbors of `region`.
    pub fn neighbor_colors<'a>(&'a self, region: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.coloring.neighbor_colors(&self.index, region)
    }

    /// Assigns `color` to `region` and records the `assign` step.
    ///
    /// The assignment is undone when the returned guard drops unless
    /// [`Assignment::keep`] is called.
    pub fn assign(&mut self, region: &str, color: &str) -> Assignment<'_, 'p> {
        self.coloring.assign(region, color);
        self.recorder.record_assign(region, color, &self.coloring);
        Assignment {
            scope: self,
            region: region.to_string(),
            kept: false,
        }
    }

    pub fn record_conflict(&mut self, region: &str, color: &str) {
        self.recorder.record_conflict(region, color, &self.coloring);
    }

    pub fn record_domain_wipeout(&mut self, region: &str, color: &str) {
        self.recorder
            .record_domain_wipeout(region, color, &self.coloring);
    }

    pub fn record_backtrack(&mut self, region: &str, color: &str) {
        debug!(event = "backtrack", region, color, step = self.step_count());
        self.recorder.record_backtrack(region, color, &self.coloring);
    }

    /// Number of steps recorded so far.
    pub fn step_count(&self) -> u64 {
        self.recorder.len() as u64
    }

    pub fn backtrack_count(&self) -> u64 {
        self.recorder.backtrack_count()
    }

    /// Time since the scope was created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns true once any termination has fired.
    ///
    /// The first firing termination's reason sticks; later calls return
    /// true without re-evaluating.
    pub fn check_termination(&mut self) -> bool {
        if self.aborted.is_some() {
            return true;
        }
        let this: &Self = self;
        let reason = this
            .terminations
            .iter()
            .find(|termination| termination.is_terminated(this))
            .map(|termination| termination.reason());
        if let Some(reason) = reason {
            debug!(
                event = "search_aborted",
                %reason,
                steps = self.step_count(),
                elapsed_ms = self.elapsed().as_millis() as u64,
            );
            self.aborted = Some(reason);
        }
        self.aborted.is_some()
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    pub fn aborted(&self) -> Option<AbortReason> {
        self.aborted
    }

    /// Consumes the scope into the uniform result.
    pub fn into_result(self, success: bool) -> SolverResult {
        let warnings = self
            .index
            .dropped()
            .iter()
            .map(ToString::to_string)
            .collect();
        let result =
            SolverResult::from_search(success, self.recorder, self.coloring).with_warnings(warnings);
        match self.aborted {
            Some(reason) => result.aborted(reason),
            None => result,
        }
    }
}

/// Scope guard for a tentative assignment.
///
/// Dereferences to the owning [`SearchScope`] so the search can recurse
/// through it; dropping it removes the assignment again.
pub struct Assignment<'s, 'p> {
    scope: &'s mut SearchScope<'p>,
    region: Region,
    kept: bool,
}

impl Assignment<'_, '_> {
    /// Makes the assignment permanent.
    pub fn keep(mut self) {
        self.kept = true;
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl<'p> Deref for Assignment<'_, 'p> {
    type Target = SearchScope<'p>;

    fn deref(&self) -> &Self::Target {
        self.scope
    }
}

impl DerefMut for Assignment<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.scope
    }
}

impl Drop for Assignment<'_, '_> {
    fn drop(&mut self) {
        if !self.kept {
            self.scope.coloring.unassign(&self.region);
        }
    }
}
