//! Sequence classification.

use crate::core::ColorArrangement;
use crate::rules::{ActiveCriterion, ROW_COUNT};
use crate::sequence::FlashSequence;

/// Picks the first-table row for a flash sequence.
///
/// Rows are tried in order; the first whose criterion holds wins. The last
/// row of every rule set is the always-true default, so classification is
/// total.
#[derive(Clone, Copy, Debug)]
pub struct Classifier<'a> {
    criteria: &'a [ActiveCriterion; ROW_COUNT],
    arrangement: &'a ColorArrangement,
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub fn new(criteria: &'a [ActiveCriterion; ROW_COUNT], arrangement: &'a ColorArrangement) -> Self {
        Self { criteria, arrangement }
    }

    /// Row index in `0..ROW_COUNT`.
    #[must_use]
    pub fn classify(&self, sequence: &FlashSequence) -> usize {
        classify(sequence, self.criteria, self.arrangement)
    }
}

/// Index of the first matching row, falling back to the last row.
#[must_use]
pub fn classify(
    sequence: &FlashSequence,
    criteria: &[ActiveCriterion; ROW_COUNT],
    arrangement: &ColorArrangement,
) -> usize {
    criteria
        .iter()
        .position(|active| active.matches(sequence.positions(), arrangement))
        .unwrap_or(ROW_COUNT - 1)
}
