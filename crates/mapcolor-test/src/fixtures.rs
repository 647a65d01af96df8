//! Problem instances with known answers.
//!
//! Region names are single capital letters in declared order (`A`, `B`,
//! ...). Fixtures taking a color count synthesize `color0..`.

use mapcolor_core::{ColoringProblem, Palette, DEFAULT_LABEL_PREFIX};

/// Name of the `i`th generated region.
pub fn region_name(i: usize) -> String {
    debug_assert!(i < 26, "fixture regions are single letters");
    char::from(b'A' + i as u8).to_string()
}

fn palette(n_colors: usize) -> Vec<String> {
    Palette::synthesize(n_colors, DEFAULT_LABEL_PREFIX).into_colors()
}

/// `A-B-C` fully connected.
pub fn triangle(n_colors: usize) -> ColoringProblem {
    complete(3, n_colors)
}

/// Every pair of `n` regions adjacent.
pub fn complete(n: usize, n_colors: usize) -> ColoringProblem {
    let regions: Vec<String> = (0..n).map(region_name).collect();
    let mut adjacencies = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            adjacencies.push(vec![regions[i].clone(), regions[j].clone()]);
        }
    }
    ColoringProblem {
        regions,
        adjacencies,
        colors: palette(n_colors),
    }
}

/// `n` regions in a line.
pub fn path(n: usize, n_colors: usize) -> ColoringProblem {
    let regions: Vec<String> = (0..n).map(region_name).collect();
    let adjacencies = regions
        .windows(2)
        .map(|pair| pair.to_vec())
        .collect();
    ColoringProblem {
        regions,
        adjacencies,
        colors: palette(n_colors),
    }
}

/// `n` regions in a cycle. Odd cycles need three colors.
pub fn cycle(n: usize, n_colors: usize) -> ColoringProblem {
    let mut problem = path(n, n_colors);
    if n > 2 {
        problem
            .adjacencies
            .push(vec![region_name(n - 1), region_name(0)]);
    }
    problem
}

/// Triangle with `[red, blue]`; not colorable.
pub fn scenario_triangle_two_colors() -> ColoringProblem {
    ColoringProblem::new(
        ["A", "B", "C"],
        [["A", "B"], ["B", "C"], ["A", "C"]],
        ["red", "blue"],
    )
}

/// Triangle with `[red, blue, green]`.
pub fn scenario_triangle_three_colors() -> ColoringProblem {
    scenario_triangle_two_colors().with_colors(["red", "blue", "green"])
}

/// Path `A-B-C` with `[red, blue]`.
pub fn scenario_path_two_colors() -> ColoringProblem {
    ColoringProblem::new(["A", "B", "C"], [["A", "B"], ["B", "C"]], ["red", "blue"])
}

/// The six-region demo map shipped with the visualizer.
///
/// A, C, D and E are pairwise adjacent, so it needs four colors.
pub fn six_region_map(n_colors: usize) -> ColoringProblem {
    ColoringProblem::new(
        ["A", "B", "C", "D", "E", "F"],
        [
            ["A", "B"],
            ["A", "C"],
            ["A", "D"],
            ["A", "E"],
            ["B", "C"],
            ["B", "F"],
            ["C", "D"],
            ["C", "E"],
            ["C", "F"],
            ["D", "E"],
            ["E", "F"],
        ],
        palette(n_colors),
    )
}

/// Mainland Australian states and territories plus Tasmania.
pub fn australia() -> ColoringProblem {
    ColoringProblem::new(
        ["WA", "NT", "SA", "Q", "NSW", "V", "T"],
        [
            ["WA", "NT"],
            ["WA", "SA"],
            ["NT", "SA"],
            ["NT", "Q"],
            ["SA", "Q"],
            ["SA", "NSW"],
            ["SA", "V"],
            ["Q", "NSW"],
            ["NSW", "V"],
        ],
        ["red", "green", "blue"],
    )
}

/// A star whose hub is declared last.
///
/// Declared order visits the leaves first; degree order visits the hub
/// first.
pub fn star_hub_last(leaves: usize, n_colors: usize) -> ColoringProblem {
    let hub = region_name(leaves);
    let mut regions: Vec<String> = (0..leaves).map(region_name).collect();
    let adjacencies = regions
        .iter()
        .map(|leaf| vec![leaf.clone(), hub.clone()])
        .collect();
    regions.push(hub);
    ColoringProblem {
        regions,
        adjacencies,
        colors: palette(n_colors),
    }
}

/// No regions at all.
pub fn empty() -> ColoringProblem {
    ColoringProblem::new(
        Vec::<&str>::new(),
        Vec::<Vec<&str>>::new(),
        ["red", "blue"],
    )
}

/// Regions but an empty palette.
pub fn no_colors() -> ColoringProblem {
    ColoringProblem::new(["A", "B"], [["A", "B"]], Vec::<&str>::new())
}

/// An adjacency naming a region that is not declared.
pub fn with_unknown_region() -> ColoringProblem {
    ColoringProblem::new(["A", "B"], [["A", "B"], ["B", "Z"]], ["red", "blue"])
}

/// Path `A-B-C` plus one three-region adjacency entry.
pub fn with_malformed_adjacency() -> ColoringProblem {
    let mut problem = scenario_path_two_colors();
    problem
        .adjacencies
        .push(vec!["A".to_string(), "B".to_string(), "C".to_string()]);
    problem
}
