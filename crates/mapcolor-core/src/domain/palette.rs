//! Palette resolution.

use super::Color;

/// Palette size used when a caller gives neither colors nor a count.
pub const DEFAULT_MAX_COLORS: usize = 3;

/// Prefix of synthesized color labels (`color0`, `color1`, ...).
pub const DEFAULT_LABEL_PREFIX: &str = "color";

/// An ordered list of distinct color labels.
///
/// # Example
///
/// ```
/// use mapcolor_core::Palette;
///
/// let palette = Palette::synthesize(3, "color");
/// assert_eq!(palette.colors(), ["color0", "color1", "color2"]);
///
/// // An explicit, non-empty list always wins over a count.
/// let palette = Palette::resolve(Some(vec!["red".into()]), Some(5), 3, "color");
/// assert_eq!(palette.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Synthesizes `count` labels `{prefix}0..{prefix}{count-1}`.
    pub fn synthesize(count: usize, prefix: &str) -> Self {
        Self {
            colors: (0..count).map(|i| format!("{prefix}{i}")).collect(),
        }
    }

    /// Picks the palette of a request.
    ///
    /// An explicit non-empty list is used as given. Otherwise `max_colors`
    /// labels are synthesized, falling back to `default_count`.
    pub fn resolve(
        colors: Option<Vec<Color>>,
        max_colors: Option<usize>,
        default_count: usize,
        prefix: &str,
    ) -> Self {
        match colors {
            Some(colors) if !colors.is_empty() => Self::new(colors),
            _ => Self::synthesize(max_colors.unwrap_or(default_count), prefix),
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
