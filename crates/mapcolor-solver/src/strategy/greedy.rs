//! Largest-degree-first greedy coloring.

use mapcolor_core::{RegionOrder, StrategyKind};

use super::ColoringStrategy;
use crate::scope::SearchScope;

/// Single pass, no backtracking.
///
/// Regions are taken by descending degree, declared order breaking ties.
/// Each gets the first palette color no colored neighbor holds. If none is
/// free the pass stops and fails. Only `assign` steps are ever recorded.
#[derive(Debug, Clone, Default)]
pub struct GreedySolver;

impl GreedySolver {
    pub fn new() -> Self {
        Self
    }
}

impl ColoringStrategy for GreedySolver {
    fn search(&self, scope: &mut SearchScope<'_>) -> bool {
        let order = scope.index().ordered(RegionOrder::DegreeDescending);

        for region in &order {
            if scope.check_termination() {
                return false;
            }

            let free = {
                let used: Vec<&str> = scope.neighbor_colors(region).collect();
                scope
                    .colors()
                    .iter()
                    .find(|color| !used.contains(&color.as_str()))
            };

            match free {
                Some(color) => scope.assign(region, color).keep(),
                None => return false,
            }
        }

        true
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Greedy
    }
}
