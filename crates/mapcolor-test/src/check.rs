//! Coloring validity checks.
//!
//! Deliberately independent of [`AdjacencyIndex`](mapcolor_core::AdjacencyIndex)
//! so a bug there cannot hide itself.

use mapcolor_core::{ColoringProblem, SolverResult};

/// Returns true if the final coloring of `result` is proper for `problem`.
///
/// Proper means every region holds a palette color, nothing else is
/// colored, and the two ends of every well-formed adjacency differ.
pub fn is_proper(problem: &ColoringProblem, result: &SolverResult) -> bool {
    violations(problem, result).is_empty()
}

/// Panics with every violation if the coloring is not proper.
pub fn assert_proper_coloring(problem: &ColoringProblem, result: &SolverResult) {
    let violations = violations(problem, result);
    assert!(
        violations.is_empty(),
        "coloring is not proper:\n  {}",
        violations.join("\n  ")
    );
}

fn violations(problem: &ColoringProblem, result: &SolverResult) -> Vec<String> {
    let coloring = &result.final_coloring;
    let mut violations = Vec::new();

    for region in &problem.regions {
        match coloring.get(region) {
            None => violations.push(format!("{region} is uncolored")),
            Some(color) if !problem.colors.iter().any(|c| c == color) => {
                violations.push(format!("{region} holds {color}, which is not in the palette"))
            }
            Some(_) => {}
        }
    }

    if coloring.len() != problem.regions.len() {
        violations.push(format!(
            "{} regions colored, {} declared",
            coloring.len(),
            problem.regions.len()
        ));
    }

    for pair in &problem.adjacencies {
        let [a, b] = pair.as_slice() else {
            continue;
        };
        if a == b {
            continue;
        }
        if let (Some(x), Some(y)) = (coloring.get(a), coloring.get(b)) {
            if x == y {
                violations.push(format!("{a} and {b} are adjacent but both {x}"));
            }
        }
    }

    violations
}
