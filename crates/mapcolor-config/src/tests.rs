//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        default_strategy = "greedy"
        region_order = "degree_descending"

        [palette]
        default_max_colors = 5
        label_prefix = "c"

        [termination]
        step_count_limit = 1000
        millis_spent_limit = 250
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.default_strategy, StrategyKind::Greedy);
    assert_eq!(config.region_order, RegionOrder::DegreeDescending);
    assert_eq!(config.palette.default_max_colors, 5);
    assert_eq!(config.palette.label_prefix, "c");
    assert_eq!(config.step_count_limit(), Some(1000));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        default_strategy: forward_checking
        palette:
          default_max_colors: 4
        termination:
          seconds_spent_limit: 3
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.default_strategy, StrategyKind::ForwardChecking);
    assert_eq!(config.region_order, RegionOrder::Declared);
    assert_eq!(config.palette.default_max_colors, 4);
    assert_eq!(config.palette.label_prefix, "color");
    assert_eq!(config.time_limit(), Some(Duration::from_secs(3)));
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config.default_strategy, StrategyKind::Backtracking);
    assert_eq!(config.palette, PaletteConfig::default());
    assert!(config.termination.is_none());
    assert_eq!(config.time_limit(), None);
}

#[test]
fn test_unknown_strategy_is_a_parse_error() {
    let err = SolverConfig::from_toml_str(r#"default_strategy = "tabu""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_zero_step_budget_is_invalid() {
    let toml = r#"
        [termination]
        step_count_limit = 0
    "#;
    let err = SolverConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SolverConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_default_strategy(StrategyKind::Greedy)
        .with_region_order(RegionOrder::DegreeDescending)
        .with_step_count_limit(10)
        .with_termination_seconds(1)
        .with_termination_millis(500);

    assert_eq!(config.default_strategy, StrategyKind::Greedy);
    assert_eq!(config.step_count_limit(), Some(10));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(1500)));
}

#[test]
fn test_resolve_palette_uses_configured_prefix() {
    let mut config = SolverConfig::default();
    config.palette.label_prefix = "hue".to_string();

    let palette = config.resolve_palette(Some(Vec::new()), Some(2));
    assert_eq!(palette.colors(), ["hue0", "hue1"]);
}

#[test]
fn test_huge_time_limit_saturates() {
    let config = SolverConfig::new()
        .with_termination_seconds(u64::MAX)
        .with_termination_millis(u64::MAX);

    assert_eq!(config.time_limit(), Some(Duration::MAX));
}

#[test]
fn test_default_palette_must_fit_limit() {
    let toml = r#"
        [palette]
        default_max_colors = 8
        max_colors_limit = 4
    "#;
    let err = SolverConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_palette_limit_parsing() {
    let config = SolverConfig::from_toml_str("[palette]\nmax_colors_limit = 16").unwrap();
    assert_eq!(config.palette.max_colors_limit, 16);
    assert_eq!(config.palette.default_max_colors, DEFAULT_MAX_COLORS);

    let config = SolverConfig::default();
    assert_eq!(config.palette.max_colors_limit, DEFAULT_MAX_COLORS_LIMIT);
}
