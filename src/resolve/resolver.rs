//! Two-stage table lookup.
//!
//! For each stage:
//!
//! 1. The column color is the color of the flash at the rule set's column
//!    position for that stage.
//! 2. The cross-reference cell at (classified row, column color) gives a
//!    code; the stage's letter of that code names a second-table column.
//! 3. Every second-table row whose environment predicate holds contributes
//!    its color in that column, top to bottom.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Color, ColorArrangement, EngineError, EngineResult, COLOR_COUNT, STAGE_COUNT};
use crate::criteria::EnvironmentSnapshot;
use crate::rules::{RuleSeedConfig, ROW_COUNT};
use crate::sequence::{FlashSequence, FlashSequences};

use super::classifier::classify;

/// Colors to press for one stage.
pub type StageInput = SmallVec<[Color; COLOR_COUNT]>;

/// Every intermediate value of one stage's lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageResolution {
    pub stage: usize,
    pub row: usize,
    pub column_color: Color,
    pub letter: char,
    pub second_column: usize,
    pub colors: StageInput,
}

/// Expected presses for all stages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedInput([StageInput; STAGE_COUNT]);

impl ExpectedInput {
    /// Build from per-stage color lists.
    #[must_use]
    pub fn new(stages: [StageInput; STAGE_COUNT]) -> Self {
        Self(stages)
    }

    /// Build from plain slices (tests, hosts).
    #[must_use]
    pub fn from_slices(stages: [&[Color]; STAGE_COUNT]) -> Self {
        Self(stages.map(|s| s.iter().copied().collect()))
    }

    /// Colors for a stage; empty for an out-of-range stage.
    #[must_use]
    pub fn stage(&self, stage: usize) -> &[Color] {
        self.0.get(stage).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Number of presses required for a stage.
    #[must_use]
    pub fn stage_len(&self, stage: usize) -> usize {
        self.stage(stage).len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Color]> {
        self.0.iter().map(|s| s.as_slice())
    }
}

/// Pure lookup over a rule set, arrangement, and environment snapshot.
#[derive(Clone, Copy, Debug)]
pub struct TableResolver<'a> {
    config: &'a RuleSeedConfig,
    arrangement: &'a ColorArrangement,
    snapshot: &'a EnvironmentSnapshot,
}

impl<'a> TableResolver<'a> {
    #[must_use]
    pub fn new(
        config: &'a RuleSeedConfig,
        arrangement: &'a ColorArrangement,
        snapshot: &'a EnvironmentSnapshot,
    ) -> Self {
        Self {
            config,
            arrangement,
            snapshot,
        }
    }

    /// Resolve one stage from its sequence and classified row.
    ///
    /// All-or-nothing: any out-of-range input fails the whole stage.
    pub fn resolve(&self, stage: usize, sequence: &FlashSequence, row: usize) -> EngineResult<StageResolution> {
        let position = *self
            .config
            .stage_column_positions
            .get(stage)
            .ok_or(EngineError::StageOutOfRange { stage })?;
        let flashed = sequence
            .get(position)
            .ok_or(EngineError::ColumnPositionOutOfRange {
                stage,
                position,
                length: sequence.len(),
            })?;
        let column_color = self.arrangement.color_at(flashed);

        let code = self
            .config
            .cross_ref_table
            .get(row)
            .ok_or(EngineError::RowOutOfRange { row })?[column_color.index()];
        let letter = code.letter(stage).ok_or(EngineError::StageOutOfRange { stage })?;
        let second_column = self
            .config
            .letter_column(letter)
            .ok_or(EngineError::UnknownLetter { letter })?;

        let colors: StageInput = self
            .config
            .active_rows(self.snapshot)
            .into_iter()
            .map(|r| self.config.second_table[r][second_column])
            .collect();

        debug!(
            stage,
            row,
            column_color = %column_color,
            letter = %letter,
            second_column,
            presses = colors.len(),
            "resolved stage"
        );

        Ok(StageResolution {
            stage,
            row,
            column_color,
            letter,
            second_column,
            colors,
        })
    }

    /// Classify and resolve every stage.
    pub fn resolve_all(&self, sequences: &FlashSequences) -> EngineResult<[StageResolution; STAGE_COUNT]> {
        let mut resolutions: Vec<StageResolution> = Vec::with_capacity(STAGE_COUNT);
        for (stage, sequence) in sequences.iter().enumerate() {
            let row = classify(sequence, &self.config.active_criteria, self.arrangement);
            debug_assert!(row < ROW_COUNT);
            resolutions.push(self.resolve(stage, sequence, row)?);
        }
        resolutions
            .try_into()
            .map_err(|_| EngineError::StageOutOfRange { stage: STAGE_COUNT })
    }
}

impl From<&[StageResolution; STAGE_COUNT]> for ExpectedInput {
    fn from(resolutions: &[StageResolution; STAGE_COUNT]) -> Self {
        Self(std::array::from_fn(|stage| resolutions[stage].colors.clone()))
    }
}
