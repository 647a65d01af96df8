//! Tests for problem description types.

use super::*;

#[test]
fn test_strategy_round_trips_through_name() {
    for kind in StrategyKind::ALL {
        assert_eq!(kind.name().parse::<StrategyKind>().unwrap(), kind);
        assert_eq!(format!("{}", kind), kind.name());
    }
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let err = "dsatur".parse::<StrategyKind>().unwrap_err();
    assert_eq!(
        err,
        crate::ColoringError::UnsupportedStrategy("dsatur".to_string())
    );
}

#[test]
fn test_strategy_names_are_case_sensitive() {
    assert!("Greedy".parse::<StrategyKind>().is_err());
}

#[test]
fn test_region_order_default() {
    assert_eq!(RegionOrder::default(), RegionOrder::Declared);
    assert_eq!(RegionOrder::DegreeDescending.to_string(), "degree_descending");
}

#[test]
fn test_palette_synthesize() {
    let palette = Palette::synthesize(4, DEFAULT_LABEL_PREFIX);
    assert_eq!(palette.colors(), ["color0", "color1", "color2", "color3"]);
}

#[test]
fn test_palette_resolve_prefers_explicit_colors() {
    let palette = Palette::resolve(
        Some(vec!["red".to_string(), "blue".to_string()]),
        Some(7),
        DEFAULT_MAX_COLORS,
        DEFAULT_LABEL_PREFIX,
    );
    assert_eq!(palette.colors(), ["red", "blue"]);
}

#[test]
fn test_palette_resolve_empty_list_uses_count() {
    let palette = Palette::resolve(Some(Vec::new()), Some(2), DEFAULT_MAX_COLORS, "c");
    assert_eq!(palette.colors(), ["c0", "c1"]);
}

#[test]
fn test_palette_resolve_falls_back_to_default_count() {
    let palette = Palette::resolve(None, None, DEFAULT_MAX_COLORS, DEFAULT_LABEL_PREFIX);
    assert_eq!(palette.len(), 3);
}

#[test]
fn test_palette_zero_count_is_empty() {
    assert!(Palette::synthesize(0, DEFAULT_LABEL_PREFIX).is_empty());
}

#[test]
fn test_problem_builder() {
    let problem = ColoringProblem::new(["A", "B"], [["A", "B"]], ["red"]).with_colors(["x", "y"]);
    assert_eq!(problem.region_count(), 2);
    assert_eq!(problem.color_count(), 2);
    assert_eq!(problem.adjacencies, vec![vec!["A".to_string(), "B".to_string()]]);
}
