//! Button colors and the clockwise arrangement of buttons.
//!
//! ## Positions vs colors
//!
//! The puzzle has six buttons arranged in a ring. A *position* (`0..6`) is
//! a clockwise slot on that ring; a [`Color`] is the symbolic color painted
//! on a button. Each session paints the six colors onto the six positions
//! with one uniform random permutation, the [`ColorArrangement`].
//!
//! Geometric rules (adjacent, opposite) always operate on positions:
//! clockwise is `+1`, counter-clockwise is `+5` and opposite is `+3`,
//! all modulo 6. Out-of-range inputs are reduced modulo 6 first.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::rng::PuzzleRng;

/// Number of buttons (and colors) on the ring.
pub const COLOR_COUNT: usize = 6;

/// One of the six button colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
    ];

    /// Canonical index of this color (table column order).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color for a canonical index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Color> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase name, as used in rule text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or(EngineError::UnknownColor { name: s.to_string() })
    }
}

/// Position one step clockwise.
#[must_use]
pub const fn clockwise(position: u8) -> u8 {
    (position % COLOR_COUNT as u8 + 1) % COLOR_COUNT as u8
}

/// Position one step counter-clockwise.
#[must_use]
pub const fn counter_clockwise(position: u8) -> u8 {
    (position % COLOR_COUNT as u8 + 5) % COLOR_COUNT as u8
}

/// Position directly across the ring.
#[must_use]
pub const fn opposite(position: u8) -> u8 {
    (position % COLOR_COUNT as u8 + 3) % COLOR_COUNT as u8
}

/// Whether two positions are neighbours on the ring.
#[must_use]
pub const fn is_adjacent(a: u8, b: u8) -> bool {
    b == clockwise(a) || b == counter_clockwise(a)
}

/// Assignment of colors to the six clockwise positions.
///
/// Fixed for the lifetime of a session. Deserialization goes through
/// [`ColorArrangement::from_colors`], so a payload repeating a color is
/// rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[Color; COLOR_COUNT]")]
pub struct ColorArrangement([Color; COLOR_COUNT]);

impl ColorArrangement {
    /// Identity arrangement: position `i` shows `Color::ALL[i]`.
    #[must_use]
    pub const fn canonical() -> Self {
        Self(Color::ALL)
    }

    /// Build an arrangement from explicit colors, clockwise from position 0.
    ///
    /// Fails unless every color appears exactly once.
    pub fn from_colors(colors: [Color; COLOR_COUNT]) -> EngineResult<Self> {
        let mut seen = [false; COLOR_COUNT];
        for color in colors {
            if std::mem::replace(&mut seen[color.index()], true) {
                return Err(EngineError::InvalidArrangement);
            }
        }
        Ok(Self(colors))
    }

    /// Draw a uniform random arrangement.
    pub fn generate(rng: &mut PuzzleRng) -> Self {
        let mut colors = Color::ALL;
        rng.shuffle(&mut colors);
        Self(colors)
    }

    /// Color shown at a position.
    #[must_use]
    pub fn color_at(&self, position: u8) -> Color {
        self.0[position as usize % COLOR_COUNT]
    }

    /// Position showing a color.
    #[must_use]
    pub fn position_of(&self, color: Color) -> u8 {
        // The arrangement is a permutation, so the color is always present.
        self.0.iter().position(|&c| c == color).unwrap_or(0) as u8
    }

    /// Colors clockwise from position 0.
    #[must_use]
    pub fn colors(&self) -> &[Color; COLOR_COUNT] {
        &self.0
    }
}

impl TryFrom<[Color; COLOR_COUNT]> for ColorArrangement {
    type Error = EngineError;

    fn try_from(colors: [Color; COLOR_COUNT]) -> EngineResult<Self> {
        Self::from_colors(colors)
    }
}

impl Default for ColorArrangement {
    fn default() -> Self {
        Self::canonical()
    }
}

impl std::fmt::Display for ColorArrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index_round_trip() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_index(i), Some(*color));
        }
        assert_eq!(Color::from_index(6), None);
    }

    #[test]
    fn test_color_display_and_parse() {
        assert_eq!(format!("{}", Color::Purple), "Purple");
        assert_eq!("purple".parse::<Color>(), Ok(Color::Purple));
        assert_eq!(" ReD ".parse::<Color>(), Ok(Color::Red));
        assert!("magenta".parse::<Color>().is_err());
    }

    #[test]
    fn test_geometry() {
        assert_eq!(clockwise(5), 0);
        assert_eq!(counter_clockwise(0), 5);
        assert_eq!(opposite(4), 1);
        assert!(is_adjacent(0, 5));
        assert!(is_adjacent(2, 3));
        assert!(!is_adjacent(1, 3));
        assert!(!is_adjacent(2, 2));
    }

    #[test]
    fn test_geometry_reduces_raw_positions() {
        assert_eq!(clockwise(255), clockwise(255 % 6));
        assert_eq!(counter_clockwise(251), counter_clockwise(251 % 6));
        assert_eq!(opposite(254), opposite(254 % 6));
        assert!(is_adjacent(255, 4));
    }

    #[test]
    fn test_arrangement_serde_checks_permutation() {
        let arrangement = ColorArrangement::from_colors([
            Color::Green,
            Color::Red,
            Color::Blue,
            Color::Yellow,
            Color::Purple,
            Color::Orange,
        ])
        .unwrap();
        let json = serde_json::to_string(&arrangement).unwrap();
        assert_eq!(json, r#"["Green","Red","Blue","Yellow","Purple","Orange"]"#);
        assert_eq!(serde_json::from_str::<ColorArrangement>(&json).unwrap(), arrangement);

        let repeated = r#"["Red","Red","Blue","Yellow","Purple","Orange"]"#;
        assert!(serde_json::from_str::<ColorArrangement>(repeated).is_err());
    }

    #[test]
    fn test_arrangement_rejects_duplicates() {
        let bad = [Color::Red, Color::Red, Color::Yellow, Color::Green, Color::Blue, Color::Purple];
        assert_eq!(ColorArrangement::from_colors(bad), Err(EngineError::InvalidArrangement));
    }

    #[test]
    fn test_arrangement_lookup() {
        let arrangement = ColorArrangement::from_colors([
            Color::Blue,
            Color::Red,
            Color::Purple,
            Color::Orange,
            Color::Green,
            Color::Yellow,
        ])
        .unwrap();

        assert_eq!(arrangement.color_at(2), Color::Purple);
        assert_eq!(arrangement.position_of(Color::Green), 4);
        for position in 0..6u8 {
            assert_eq!(arrangement.position_of(arrangement.color_at(position)), position);
        }
    }

    #[test]
    fn test_generated_arrangement_is_permutation() {
        let mut rng = PuzzleRng::new(7);
        let arrangement = ColorArrangement::generate(&mut rng);
        let mut colors = *arrangement.colors();
        colors.sort();
        assert_eq!(colors, Color::ALL);
    }
}
