//! Chronological backtracking.

use mapcolor_core::{Region, RegionOrder, StrategyKind};

use super::ColoringStrategy;
use crate::scope::SearchScope;

/// Exhaustive depth-first search.
///
/// Regions are visited in the configured [`RegionOrder`] and colors in
/// palette order. The first complete assignment wins.
///
/// For each candidate color of the region at the current depth:
/// - invalid against colored neighbors: record a `conflict` and move on
/// - valid: assign, record `assign`, descend; if the subtree fails, undo,
///   record `backtrack` and move on
#[derive(Debug, Clone, Default)]
pub struct BacktrackingSolver {
    order: RegionOrder,
}

impl BacktrackingSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variable ordering.
    pub fn with_order(mut self, order: RegionOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> RegionOrder {
        self.order
    }

    fn search_from(&self, scope: &mut SearchScope<'_>, order: &[Region], position: usize) -> bool {
        let Some(region) = order.get(position) else {
            return true;
        };

        for color in scope.colors() {
            if scope.check_termination() {
                return false;
            }

            if !scope.is_valid_color(region, color) {
                scope.record_conflict(region, color);
                continue;
            }

            let mut assigned = scope.assign(region, color);
            if self.search_from(&mut assigned, order, position + 1) {
                assigned.keep();
                return true;
            }
            drop(assigned);

            if scope.is_aborted() {
                return false;
            }
            scope.record_backtrack(region, color);
        }

        false
    }
}

impl ColoringStrategy for BacktrackingSolver {
    fn search(&self, scope: &mut SearchScope<'_>) -> bool {
        let order = scope.index().ordered(self.order);
        self.search_from(scope, &order, 0)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Backtracking
    }
}
