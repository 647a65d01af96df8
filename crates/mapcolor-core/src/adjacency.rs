//! Undirected neighbor lookup.

use std::fmt;

use indexmap::IndexMap;
use tracing::warn;

use crate::domain::{Region, RegionOrder};
use crate::error::{ColoringError, Result};

/// An adjacency entry that was not a pair and got dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedAdjacency {
    /// Position of the entry in the adjacency list.
    pub position: usize,
    /// Number of regions the entry held.
    pub arity: usize,
}

impl fmt::Display for MalformedAdjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "adjacency #{} dropped: expected 2 regions, found {}",
            self.position, self.arity
        )
    }
}

/// Maps every declared region to its neighbors.
///
/// Neighbor order follows the declaration order of the adjacency pairs and
/// duplicates are preserved. Entries that are not exactly two regions are
/// dropped and reported through [`dropped`](Self::dropped).
///
/// # Example
///
/// ```
/// use mapcolor_core::AdjacencyIndex;
///
/// let regions = vec!["A".to_string(), "B".to_string(), "C".to_string()];
/// let adjacencies = vec![
///     vec!["A".to_string(), "B".to_string()],
///     vec!["B".to_string(), "C".to_string()],
/// ];
///
/// let index = AdjacencyIndex::build(&regions, &adjacencies).unwrap();
/// assert_eq!(index.neighbors("B"), ["A", "C"]);
/// assert_eq!(index.degree("A"), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    neighbors: IndexMap<Region, Vec<Region>>,
    dropped: Vec<MalformedAdjacency>,
}

impl AdjacencyIndex {
    /// Builds the index.
    ///
    /// # Errors
    ///
    /// Returns [`ColoringError::UnknownRegion`] if a pair names a region
    /// outside `regions`. Nothing is built in that case.
    pub fn build(regions: &[Region], adjacencies: &[Vec<Region>]) -> Result<Self> {
        let mut neighbors: IndexMap<Region, Vec<Region>> = regions
            .iter()
            .map(|region| (region.clone(), Vec::new()))
            .collect();
        let mut dropped = Vec::new();

        for (position, entry) in adjacencies.iter().enumerate() {
            let [a, b] = entry.as_slice() else {
                warn!(
                    event = "adjacency_dropped",
                    position,
                    arity = entry.len(),
                    "Dropping malformed adjacency"
                );
                dropped.push(MalformedAdjacency {
                    position,
                    arity: entry.len(),
                });
                continue;
            };

            for region in [a, b] {
                if !neighbors.contains_key(region) {
                    return Err(ColoringError::UnknownRegion {
                        region: region.clone(),
                        position,
                    });
                }
            }

            if let Some(list) = neighbors.get_mut(a) {
                list.push(b.clone());
            }
            if let Some(list) = neighbors.get_mut(b) {
                list.push(a.clone());
            }
        }

        Ok(Self { neighbors, dropped })
    }

    /// Returns the neighbors of `region`, empty for undeclared regions.
    pub fn neighbors(&self, region: &str) -> &[Region] {
        self.neighbors
            .get(region)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of neighbor entries, duplicates included.
    pub fn degree(&self, region: &str) -> usize {
        self.neighbors(region).len()
    }

    /// Declared regions in declaration order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.neighbors.keys()
    }

    pub fn region_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn contains(&self, region: &str) -> bool {
        self.neighbors.contains_key(region)
    }

    /// Adjacency entries dropped during construction.
    pub fn dropped(&self) -> &[MalformedAdjacency] {
        &self.dropped
    }

    /// Returns the regions in the requested search order.
    ///
    /// `DegreeDescending` uses a stable sort so equal degrees keep their
    /// declared order.
    pub fn ordered(&self, order: RegionOrder) -> Vec<Region> {
        let mut regions: Vec<Region> = self.neighbors.keys().cloned().collect();
        if order == RegionOrder::DegreeDescending {
            regions.sort_by(|a, b| self.degree(b).cmp(&self.degree(a)));
        }
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn pairs(items: &[&[&str]]) -> Vec<Vec<String>> {
        items.iter().map(|p| strings(p)).collect()
    }

    #[test]
    fn test_neighbors_are_symmetric() {
        let index =
            AdjacencyIndex::build(&strings(&["A", "B", "C"]), &pairs(&[&["A", "B"], &["A", "C"]]))
                .unwrap();

        assert_eq!(index.neighbors("A"), ["B", "C"]);
        assert_eq!(index.neighbors("B"), ["A"]);
        assert_eq!(index.neighbors("C"), ["A"]);
    }

    #[test]
    fn test_isolated_region_has_no_neighbors() {
        let index = AdjacencyIndex::build(&strings(&["A", "B"]), &[]).unwrap();
        assert!(index.neighbors("A").is_empty());
        assert_eq!(index.region_count(), 2);
    }

    #[test]
    fn test_duplicates_preserved() {
        let index =
            AdjacencyIndex::build(&strings(&["A", "B"]), &pairs(&[&["A", "B"], &["B", "A"]]))
                .unwrap();
        assert_eq!(index.neighbors("A"), ["B", "B"]);
        assert_eq!(index.degree("B"), 2);
    }

    #[test]
    fn test_malformed_entries_are_dropped_and_reported() {
        let index = AdjacencyIndex::build(
            &strings(&["A", "B", "C"]),
            &pairs(&[&["A"], &["A", "B"], &["A", "B", "C"], &[]]),
        )
        .unwrap();

        assert_eq!(index.neighbors("A"), ["B"]);
        assert_eq!(
            index.dropped(),
            [
                MalformedAdjacency { position: 0, arity: 1 },
                MalformedAdjacency { position: 2, arity: 3 },
                MalformedAdjacency { position: 3, arity: 0 },
            ]
        );
        assert_eq!(
            index.dropped()[0].to_string(),
            "adjacency #0 dropped: expected 2 regions, found 1"
        );
    }

    #[test]
    fn test_unknown_region_fails_fast() {
        let err = AdjacencyIndex::build(&strings(&["A", "B"]), &pairs(&[&["A", "B"], &["B", "Z"]]))
            .unwrap_err();
        assert_eq!(
            err,
            ColoringError::UnknownRegion {
                region: "Z".to_string(),
                position: 1
            }
        );
    }

    #[test]
    fn test_malformed_entry_with_unknown_region_is_only_dropped() {
        let index = AdjacencyIndex::build(&strings(&["A"]), &pairs(&[&["Z"]])).unwrap();
        assert_eq!(index.dropped().len(), 1);
    }

    #[test]
    fn test_degree_descending_order_is_stable() {
        let index = AdjacencyIndex::build(
            &strings(&["A", "B", "C", "D"]),
            &pairs(&[&["B", "C"], &["C", "D"], &["A", "D"]]),
        )
        .unwrap();

        assert_eq!(index.ordered(RegionOrder::Declared), ["A", "B", "C", "D"]);
        assert_eq!(
            index.ordered(RegionOrder::DegreeDescending),
            ["C", "D", "A", "B"]
        );
    }
}
