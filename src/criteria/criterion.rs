//! Classification criteria - static rule records.
//!
//! A `Criterion` is one row rule of the first table: a pure boolean test over
//! a flash sequence. Some criteria name up to three *pivot* colors (e.g.
//! "at most one of red, green and blue flashed"); the pivots are chosen per
//! rule seed and passed in as positions at evaluation time.

use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorArrangement};

/// Three pivot colors drawn for a criterion that needs them.
pub type Pivots = [Color; 3];

/// Signature shared by every predicate: flashed positions, pivot positions.
pub type PredicateFn = fn(&[u8], &[u8; 3]) -> bool;

/// Identifier of a catalog criterion.
///
/// Catalog entries are numbered from 0; [`CriterionId::OTHERWISE`] is the
/// always-true default row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CriterionId(pub u16);

impl CriterionId {
    /// The always-true default row.
    pub const OTHERWISE: CriterionId = CriterionId(u16::MAX);

    /// Create a new criterion ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CriterionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Self::OTHERWISE {
            write!(f, "Criterion(otherwise)")
        } else {
            write!(f, "Criterion({})", self.0)
        }
    }
}

/// A classification rule.
///
/// `weight` only orders the selected rows; it never biases selection.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Criterion {
    /// Catalog identifier.
    pub id: CriterionId,

    /// Condition clause, with `{0}`..`{2}` standing for pivot colors.
    pub name: &'static str,

    /// Sort key for row order (lower rows first).
    pub weight: u32,

    /// Whether the predicate reads pivot colors.
    pub requires_pivots: bool,

    #[serde(skip)]
    predicate: PredicateFn,
}

impl Criterion {
    /// Create a criterion that ignores pivots.
    pub const fn plain(id: u16, name: &'static str, weight: u32, predicate: PredicateFn) -> Self {
        Self {
            id: CriterionId::new(id),
            name,
            weight,
            requires_pivots: false,
            predicate,
        }
    }

    /// Create a criterion that reads pivot colors.
    pub const fn pivoted(id: u16, name: &'static str, weight: u32, predicate: PredicateFn) -> Self {
        Self {
            id: CriterionId::new(id),
            name,
            weight,
            requires_pivots: true,
            predicate,
        }
    }

    /// The always-true default row.
    pub const fn otherwise() -> Self {
        Self {
            id: CriterionId::OTHERWISE,
            name: "",
            weight: u32::MAX,
            requires_pivots: false,
            predicate: always,
        }
    }

    /// Is this the default row?
    #[must_use]
    pub fn is_otherwise(&self) -> bool {
        self.id == CriterionId::OTHERWISE
    }

    /// Evaluate against a sequence of positions and pivot positions.
    #[must_use]
    pub fn matches(&self, sequence: &[u8], pivot_positions: &[u8; 3]) -> bool {
        (self.predicate)(sequence, pivot_positions)
    }

    /// Evaluate with pivot colors resolved through an arrangement.
    ///
    /// Criteria without pivots ignore `pivots`.
    #[must_use]
    pub fn matches_colors(
        &self,
        sequence: &[u8],
        pivots: Option<&Pivots>,
        arrangement: &ColorArrangement,
    ) -> bool {
        let positions = match pivots {
            Some(p) => p.map(|c| arrangement.position_of(c)),
            None => [0, 0, 0],
        };
        self.matches(sequence, &positions)
    }

    /// Condition clause with pivot placeholders filled in.
    #[must_use]
    pub fn clause(&self, pivots: Option<&Pivots>) -> String {
        let mut text = self.name.to_string();
        if let Some(pivots) = pivots {
            for (i, color) in pivots.iter().enumerate() {
                text = text.replace(&format!("{{{i}}}"), color.name());
            }
        }
        text
    }

    /// Rule text as it appears in row `row` of the table.
    ///
    /// The first row reads "If ...", later rows "Otherwise, if ...", and the
    /// default reads "Otherwise".
    #[must_use]
    pub fn describe(&self, row: usize, pivots: Option<&Pivots>) -> String {
        if self.is_otherwise() {
            "Otherwise".to_string()
        } else if row == 0 {
            format!("If {}", self.clause(pivots))
        } else {
            format!("Otherwise, if {}", self.clause(pivots))
        }
    }
}

fn always(_: &[u8], _: &[u8; 3]) -> bool {
    true
}

impl PartialEq for Criterion {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Criterion {}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains_first_pivot(seq: &[u8], pivots: &[u8; 3]) -> bool {
        seq.contains(&pivots[0])
    }

    #[test]
    fn test_otherwise_always_matches() {
        let otherwise = Criterion::otherwise();
        assert!(otherwise.is_otherwise());
        assert!(otherwise.matches(&[], &[0, 0, 0]));
        assert!(otherwise.matches(&[1, 2, 3], &[4, 5, 0]));
        assert_eq!(otherwise.describe(5, None), "Otherwise");
    }

    #[test]
    fn test_pivot_resolution_through_arrangement() {
        let criterion = Criterion::pivoted(0, "{0} flashed", 1, contains_first_pivot);
        let arrangement = ColorArrangement::canonical();
        let pivots = [Color::Blue, Color::Red, Color::Green];

        // Blue sits at position 4 in the canonical arrangement
        assert!(criterion.matches_colors(&[4, 0], Some(&pivots), &arrangement));
        assert!(!criterion.matches_colors(&[0, 1], Some(&pivots), &arrangement));
    }

    #[test]
    fn test_clause_substitutes_pivots() {
        let criterion = Criterion::pivoted(3, "at most one of {0}, {1} and {2} flashed", 1, contains_first_pivot);
        let pivots = [Color::Red, Color::Green, Color::Blue];

        assert_eq!(criterion.clause(Some(&pivots)), "at most one of red, green and blue flashed");
        assert_eq!(
            criterion.describe(0, Some(&pivots)),
            "If at most one of red, green and blue flashed"
        );
        assert_eq!(
            criterion.describe(2, Some(&pivots)),
            "Otherwise, if at most one of red, green and blue flashed"
        );
    }

    #[test]
    fn test_criterion_id_display() {
        assert_eq!(format!("{}", CriterionId::new(7)), "Criterion(7)");
        assert_eq!(format!("{}", CriterionId::OTHERWISE), "Criterion(otherwise)");
    }
}
