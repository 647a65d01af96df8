//! Backtracking with forward checking.

use std::collections::BTreeSet;
use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use mapcolor_core::{Color, Region, RegionOrder, StrategyKind};

use super::ColoringStrategy;
use crate::scope::SearchScope;

/// Backtracking that prunes neighbor domains on every assignment.
///
/// Each region keeps the set of colors still viable for it. Assigning a
/// color removes it from the domain of every unassigned neighbor. If a
/// neighbor's domain empties, the assignment is undone on the spot and a
/// `conflict` is recorded for that neighbor instead of descending. Domains
/// are restored exactly whenever an assignment is undone.
///
/// For the same region order this never records more backtracks than
/// [`BacktrackingSolver`](super::BacktrackingSolver) and reaches the same
/// verdict.
#[derive(Debug, Clone, Default)]
pub struct ForwardCheckingSolver {
    order: RegionOrder,
}

impl ForwardCheckingSolver {
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

    fn search_from(
        &self,
        scope: &mut SearchScope<'_>,
        domains: &mut Domains,
        order: &[Region],
        position: usize,
    ) -> bool {
        let Some(region) = order.get(position) else {
            return true;
        };

        for color in scope.colors() {
            if scope.check_termination() {
                return false;
            }

            if !domains.contains(region, color) {
                scope.record_conflict(region, color);
                continue;
            }

            let mut assigned = scope.assign(region, color);
            let mut pruning = Pruning::new(domains);
            let wiped_out = assigned
                .index()
                .neighbors(region)
                .iter()
                .filter(|neighbor| !assigned.coloring().is_assigned(neighbor))
                .find(|neighbor| pruning.remove(neighbor, color) && pruning.is_empty(neighbor))
                .cloned();

            if let Some(neighbor) = wiped_out {
                drop(pruning);
                drop(assigned);
                scope.record_domain_wipeout(&neighbor, color);
                continue;
            }

            if self.search_from(&mut assigned, &mut pruning, order, position + 1) {
                pruning.keep();
                assigned.keep();
                return true;
            }
            drop(pruning);
            drop(assigned);

            if scope.is_aborted() {
                return false;
            }
            scope.record_backtrack(region, color);
        }

        false
    }
}

impl ColoringStrategy for ForwardCheckingSolver {
    fn search(&self, scope: &mut SearchScope<'_>) -> bool {
        let order = scope.index().ordered(self.order);
        let mut domains = Domains::full(scope.index().regions(), scope.colors());
        self.search_from(scope, &mut domains, &order, 0)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::ForwardChecking
    }
}

/// Candidate colors per region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Domains {
    live: IndexMap<Region, BTreeSet<Color>>,
}

impl Domains {
    /// Every region starts with the whole palette.
    pub(crate) fn full<'a>(regions: impl Iterator<Item = &'a Region>, colors: &[Color]) -> Self {
        let palette: BTreeSet<Color> = colors.iter().cloned().collect();
        Self {
            live: regions
                .map(|region| (region.clone(), palette.clone()))
                .collect(),
        }
    }

    pub(crate) fn contains(&self, region: &str, color: &str) -> bool {
        self.live
            .get(region)
            .is_some_and(|domain| domain.contains(color))
    }

    pub(crate) fn is_empty(&self, region: &str) -> bool {
        self.live.get(region).map_or(true, BTreeSet::is_empty)
    }

    fn remove(&mut self, region: &str, color: &str) -> bool {
        self.live
            .get_mut(region)
            .is_some_and(|domain| domain.remove(color))
    }

    fn insert(&mut self, region: &str, color: &str) {
        if let Some(domain) = self.live.get_mut(region) {
            domain.insert(color.to_string());
        }
    }
}

/// Scope guard over the domain removals of one assignment.
///
/// Only removals that actually shrank a domain are remembered, so dropping
/// the guard restores every domain to its exact prior contents.
struct Pruning<'d> {
    domains: &'d mut Domains,
    removed: Vec<(Region, Color)>,
    kept: bool,
}

impl<'d> Pruning<'d> {
    fn new(domains: &'d mut Domains) -> Self {
        Self {
            domains,
            removed: Vec::new(),
            kept: false,
        }
    }

    /// Removes `color` from `region`'s domain, returning whether it shrank.
    fn remove(&mut self, region: &str, color: &str) -> bool {
        let shrank = self.domains.remove(region, color);
        if shrank {
            self.removed.push((region.to_string(), color.to_string()));
        }
        shrank
    }

    fn keep(mut self) {
        self.kept = true;
    }
}

impl Deref for Pruning<'_> {
    type Target = Domains;

    fn deref(&self) -> &Self::Target {
        self.domains
    }
}

impl DerefMut for Pruning<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.domains
    }
}

impl Drop for Pruning<'_> {
    fn drop(&mut self) {
        if self.kept {
            return;
        }
        for (region, color) in self.removed.drain(..).rev() {
            self.domains.insert(&region, &color);
        }
    }
}
