//! Strategy and ordering selectors.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ColoringError;

/// The search strategies the engine implements.
///
/// Parsing an unknown name fails with [`ColoringError::UnsupportedStrategy`];
/// it is never downgraded to a default.
///
/// ```
/// use mapcolor_core::StrategyKind;
///
/// let kind: StrategyKind = "forward_checking".parse().unwrap();
/// assert_eq!(kind, StrategyKind::ForwardChecking);
/// assert!("simulated_annealing".parse::<StrategyKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyKind {
    /// Exhaustive depth-first search with chronological backtracking.
    #[default]
    Backtracking,

    /// Single pass, highest degree first, first free color.
    Greedy,

    /// Backtracking with neighbor domain pruning.
    ForwardChecking,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Backtracking,
        StrategyKind::Greedy,
        StrategyKind::ForwardChecking,
    ];

    /// Returns the snake_case name used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Backtracking => "backtracking",
            StrategyKind::Greedy => "greedy",
            StrategyKind::ForwardChecking => "forward_checking",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ColoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ColoringError::UnsupportedStrategy(s.to_string()))
    }
}

/// Variable ordering for the backtracking searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RegionOrder {
    /// The order of the problem's region list.
    #[default]
    Declared,

    /// Highest degree first, declared order breaking ties.
    DegreeDescending,
}

impl fmt::Display for RegionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionOrder::Declared => write!(f, "declared"),
            RegionOrder::DegreeDescending => write!(f, "degree_descending"),
        }
    }
}
