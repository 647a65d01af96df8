//! The input of one solve call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Region};

/// A graph-coloring problem.
///
/// The region list is both the vertex set and the declared enumeration
/// order. Adjacencies are kept as raw entries so that malformed ones (not
/// exactly two regions) can be reported instead of being rejected at parse
/// time.
///
/// # Example
///
/// ```
/// use mapcolor_core::ColoringProblem;
///
/// let problem = ColoringProblem::new(["A", "B", "C"], [["A", "B"], ["B", "C"]], ["red", "blue"]);
/// assert_eq!(problem.region_count(), 3);
/// assert_eq!(problem.adjacencies.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColoringProblem {
    pub regions: Vec<Region>,
    pub adjacencies: Vec<Vec<Region>>,
    pub colors: Vec<Color>,
}

impl ColoringProblem {
    /// Creates a problem from anything string-like.
    pub fn new<R, A, P, C>(
        regions: impl IntoIterator<Item = R>,
        adjacencies: impl IntoIterator<Item = A>,
        colors: impl IntoIterator<Item = C>,
    ) -> Self
    where
        R: Into<Region>,
        A: IntoIterator<Item = P>,
        P: Into<Region>,
        C: Into<Color>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
            adjacencies: adjacencies
                .into_iter()
                .map(|pair| pair.into_iter().map(Into::into).collect())
                .collect(),
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// Replaces the palette.
    pub fn with_colors<C: Into<Color>>(mut self, colors: impl IntoIterator<Item = C>) -> Self {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn color_count(&self) -> usize {
        self.colors.len()
    }
}
