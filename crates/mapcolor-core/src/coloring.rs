//! Partial region → color assignment.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::adjacency::AdjacencyIndex;
use crate::domain::{Color, Region};

/// The assignment state mutated by a search.
///
/// Iteration order is assignment order. [`unassign`](Self::unassign) keeps
/// the relative order of the remaining entries.
///
/// # Example
///
/// ```
/// use mapcolor_core::{AdjacencyIndex, Coloring};
///
/// let regions = vec!["A".to_string(), "B".to_string()];
/// let adjacencies = vec![vec!["A".to_string(), "B".to_string()]];
/// let index = AdjacencyIndex::build(&regions, &adjacencies).unwrap();
///
/// let mut coloring = Coloring::new();
/// coloring.assign("A", "red");
///
/// assert!(!coloring.is_valid_color(&index, "B", "red"));
/// assert!(coloring.is_valid_color(&index, "B", "blue"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Coloring {
    assignments: IndexMap<Region, Color>,
}

impl Coloring {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no assigned neighbor of `region` holds `color`.
    pub fn is_valid_color(&self, index: &AdjacencyIndex, region: &str, color: &str) -> bool {
        index
            .neighbors(region)
            .iter()
            .all(|neighbor| self.get(neighbor) != Some(color))
    }

    /// Colors currently held by the assigned neighbors of `region`.
    pub fn neighbor_colors<'a>(
        &'a self,
        index: &'a AdjacencyIndex,
        region: &str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        index
            .neighbors(region)
            .iter()
            .filter_map(|neighbor| self.get(neighbor))
    }

    /// Assigns `color` to `region`, replacing any previous color in place.
    pub fn assign(&mut self, region: impl Into<Region>, color: impl Into<Color>) {
        self.assignments.insert(region.into(), color.into());
    }

    /// Removes the color of `region`, returning it.
    pub fn unassign(&mut self, region: &str) -> Option<Color> {
        self.assignments.shift_remove(region)
    }

    pub fn get(&self, region: &str) -> Option<&str> {
        self.assignments.get(region).map(String::as_str)
    }

    pub fn is_assigned(&self, region: &str) -> bool {
        self.assignments.contains_key(region)
    }

    /// Returns an independent copy of the current state.
    pub fn snapshot(&self) -> Coloring {
        self.clone()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn clear(&mut self) {
        self.assignments.clear();
    }

    /// Iterates `(region, color)` in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments
            .iter()
            .map(|(region, color)| (region.as_str(), color.as_str()))
    }
}

impl<R: Into<Region>, C: Into<Color>> FromIterator<(R, C)> for Coloring {
    fn from_iter<I: IntoIterator<Item = (R, C)>>(iter: I) -> Self {
        Self {
            assignments: iter
                .into_iter()
                .map(|(region, color)| (region.into(), color.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_index() -> AdjacencyIndex {
        let regions: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let adjacencies: Vec<Vec<String>> = [["A", "B"], ["B", "C"], ["A", "C"]]
            .iter()
            .map(|p| p.iter().map(|s| s.to_string()).collect())
            .collect();
        AdjacencyIndex::build(&regions, &adjacencies).unwrap()
    }

    #[test]
    fn test_valid_when_no_neighbor_assigned() {
        let index = triangle_index();
        let coloring = Coloring::new();
        assert!(coloring.is_valid_color(&index, "A", "red"));
    }

    #[test]
    fn test_invalid_when_neighbor_holds_color() {
        let index = triangle_index();
        let mut coloring = Coloring::new();
        coloring.assign("A", "red");
        coloring.assign("B", "blue");

        assert!(!coloring.is_valid_color(&index, "C", "red"));
        assert!(!coloring.is_valid_color(&index, "C", "blue"));
        assert!(coloring.is_valid_color(&index, "C", "green"));
    }

    #[test]
    fn test_non_neighbors_do_not_constrain() {
        let regions = vec!["A".to_string(), "B".to_string()];
        let index = AdjacencyIndex::build(&regions, &[]).unwrap();
        let mut coloring = Coloring::new();
        coloring.assign("A", "red");
        assert!(coloring.is_valid_color(&index, "B", "red"));
    }

    #[test]
    fn test_unassign_preserves_order() {
        let mut coloring = Coloring::new();
        coloring.assign("C", "red");
        coloring.assign("A", "blue");
        coloring.assign("B", "green");

        assert_eq!(coloring.unassign("A"), Some("blue".to_string()));
        let order: Vec<_> = coloring.iter().map(|(r, _)| r).collect();
        assert_eq!(order, ["C", "B"]);
        assert_eq!(coloring.unassign("A"), None);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut coloring = Coloring::new();
        coloring.assign("A", "red");
        let snapshot = coloring.snapshot();
        coloring.assign("B", "blue");
        coloring.unassign("A");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("A"), Some("red"));
        assert!(!snapshot.is_assigned("B"));
    }

    #[test]
    fn test_neighbor_colors() {
        let index = triangle_index();
        let coloring: Coloring = [("A", "red"), ("C", "green")].into_iter().collect();
        let used: Vec<_> = coloring.neighbor_colors(&index, "B").collect();
        assert_eq!(used, ["red", "green"]);
    }
}
