//! Lookup tables and their canonical contents.
//!
//! ## Cross-reference table
//!
//! 6 rows (classification result) × 6 columns (column color, canonical color
//! order). Each cell holds a three-letter code; letter `s` is used in stage
//! `s`. Every letter comes from [`SECOND_TABLE_ALPHABET`].
//!
//! ## Second table
//!
//! 6 rows (environment predicates, in the rule seed's order) × 6 columns
//! (alphabet letters). Each cell is the color to press.
//!
//! In the canonical tables every stage layer of the cross-reference table
//! and the whole second table are Latin squares.

use serde::{Deserialize, Serialize};

use crate::core::{Color, COLOR_COUNT, STAGE_COUNT};

/// Letters labelling the second table's columns, left to right.
pub const SECOND_TABLE_ALPHABET: [char; COLOR_COUNT] = ['A', 'C', 'D', 'E', 'F', 'H'];

/// Canonical flash index used as the column color in each stage.
pub const CANONICAL_COLUMN_POSITIONS: [usize; STAGE_COUNT] = [0, 1, 2];

/// Highest flash index a rule seed may pick per stage.
///
/// Stage `s` always has at least `3 + s` flashes.
pub const COLUMN_POSITION_LIMITS: [usize; STAGE_COUNT] = [2, 3, 4];

/// Column of the second table labelled by `letter`.
#[must_use]
pub fn alphabet_index(letter: char) -> Option<usize> {
    SECOND_TABLE_ALPHABET.iter().position(|&l| l == letter)
}

/// One cross-reference cell: a letter per stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrossRefCode(pub [char; STAGE_COUNT]);

impl CrossRefCode {
    /// Build from a three-letter ASCII string.
    #[must_use]
    pub const fn from_ascii(text: &str) -> Self {
        let bytes = text.as_bytes();
        Self([bytes[0] as char, bytes[1] as char, bytes[2] as char])
    }

    /// Letter for a stage.
    #[must_use]
    pub fn letter(&self, stage: usize) -> Option<char> {
        self.0.get(stage).copied()
    }
}

impl std::fmt::Display for CrossRefCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

pub type CrossRefTable = [[CrossRefCode; COLOR_COUNT]; COLOR_COUNT];
pub type SecondTable = [[Color; COLOR_COUNT]; COLOR_COUNT];

const fn row(cells: [&str; COLOR_COUNT]) -> [CrossRefCode; COLOR_COUNT] {
    [
        CrossRefCode::from_ascii(cells[0]),
        CrossRefCode::from_ascii(cells[1]),
        CrossRefCode::from_ascii(cells[2]),
        CrossRefCode::from_ascii(cells[3]),
        CrossRefCode::from_ascii(cells[4]),
        CrossRefCode::from_ascii(cells[5]),
    ]
}

/// Cross-reference table used by rule seed 1.
pub const CANONICAL_CROSS_REF: CrossRefTable = [
    row(["ECA", "DDD", "FEF", "AFC", "HAE", "CHH"]),
    row(["AFE", "EHC", "DDH", "HAD", "CEA", "FCF"]),
    row(["HHF", "AEA", "EAC", "CCE", "FFH", "DDD"]),
    row(["CED", "HFH", "ACA", "FDF", "DHC", "EAE"]),
    row(["DDC", "FAF", "CFE", "EHH", "ACD", "HEA"]),
    row(["FAH", "CCE", "HHD", "DEA", "EDF", "AFC"]),
];

/// Second table used by rule seed 1.
pub const CANONICAL_SECOND_TABLE: SecondTable = {
    use Color::{Blue, Green, Orange, Purple, Red, Yellow};
    [
        [Orange, Green, Blue, Purple, Yellow, Red],
        [Red, Orange, Purple, Yellow, Blue, Green],
        [Blue, Yellow, Orange, Red, Green, Purple],
        [Yellow, Purple, Green, Orange, Red, Blue],
        [Green, Red, Yellow, Blue, Purple, Orange],
        [Purple, Blue, Red, Green, Orange, Yellow],
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation<T: Copy + PartialEq>(items: &[T], universe: &[T]) -> bool {
        items.len() == universe.len() && universe.iter().all(|u| items.contains(u))
    }

    #[test]
    fn test_alphabet_index() {
        assert_eq!(alphabet_index('A'), Some(0));
        assert_eq!(alphabet_index('H'), Some(5));
        assert_eq!(alphabet_index('B'), None);
    }

    #[test]
    fn test_code_letters() {
        let code = CrossRefCode::from_ascii("ECA");
        assert_eq!(code.letter(0), Some('E'));
        assert_eq!(code.letter(2), Some('A'));
        assert_eq!(code.letter(3), None);
        assert_eq!(code.to_string(), "ECA");
    }

    #[test]
    fn test_canonical_cross_ref_layers_are_latin() {
        for stage in 0..STAGE_COUNT {
            for r in 0..COLOR_COUNT {
                let row: Vec<char> = (0..COLOR_COUNT).map(|c| CANONICAL_CROSS_REF[r][c].0[stage]).collect();
                assert!(is_permutation(&row, &SECOND_TABLE_ALPHABET), "stage {stage} row {r}");
            }
            for c in 0..COLOR_COUNT {
                let col: Vec<char> = (0..COLOR_COUNT).map(|r| CANONICAL_CROSS_REF[r][c].0[stage]).collect();
                assert!(is_permutation(&col, &SECOND_TABLE_ALPHABET), "stage {stage} column {c}");
            }
        }
    }

    #[test]
    fn test_canonical_second_table_is_latin() {
        for r in 0..COLOR_COUNT {
            assert!(is_permutation(&CANONICAL_SECOND_TABLE[r], &Color::ALL));
            let col: Vec<Color> = (0..COLOR_COUNT).map(|i| CANONICAL_SECOND_TABLE[i][r]).collect();
            assert!(is_permutation(&col, &Color::ALL));
        }
    }

    #[test]
    fn test_column_limits_cover_canonical_positions() {
        for stage in 0..STAGE_COUNT {
            assert!(CANONICAL_COLUMN_POSITIONS[stage] <= COLUMN_POSITION_LIMITS[stage]);
        }
    }
}
