//! Rule-seed synthesis.
//!
//! `RuleSeedGenerator` turns an integer seed into a concrete rule set:
//! five row criteria plus the default, the environment predicates and their
//! row order, the per-seed cross-reference and second tables, and the flash
//! index used as the column color in each stage.
//!
//! ## Deterministic transform
//!
//! For any seed other than [`CANONICAL_RULE_SEED`]:
//!
//! 1. Seed a [`PuzzleRng`] and discard a seed-dependent warm-up prefix.
//! 2. Shuffle the whole catalog and keep the first five; sort them by weight.
//! 3. Draw pivots (first three of a color permutation) for each pivoted row.
//! 4. Draw the threshold mode and shuffle the six environment predicates.
//! 5. Per stage, draw a row and a column permutation; each stage's letter of
//!    a cross-reference cell comes from the permuted canonical cell.
//! 6. Draw strictly increasing column positions.
//! 7. Draw one more row/column permutation pair for the second table.
//!
//! Seed 1 skips all of this and returns [`RuleSeedConfig::canonical`].

use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Color, ColorArrangement, PuzzleRng, CANONICAL_RULE_SEED, COLOR_COUNT, STAGE_COUNT};
use crate::criteria::catalog::{
    AT_MOST_ONE_OF_PIVOTS, CATALOG, FLASH_ADJACENT_RETURN, THREE_ADJACENT_CLOCKWISE,
    TWO_ADJACENT_CLOCKWISE, TWO_OPPOSITE_MISSING,
};
use crate::criteria::{
    Criterion, CriterionId, CriterionPool, EnvironmentPredicate, EnvironmentSnapshot, Pivots,
    ThresholdMode,
};

use super::tables::{
    alphabet_index, CrossRefCode, CrossRefTable, SecondTable, CANONICAL_COLUMN_POSITIONS,
    CANONICAL_CROSS_REF, CANONICAL_SECOND_TABLE, COLUMN_POSITION_LIMITS, SECOND_TABLE_ALPHABET,
};

/// Number of criteria drawn from the catalog.
pub const ACTIVE_CRITERIA: usize = 5;

/// Number of rows in the first table (active criteria plus the default).
pub const ROW_COUNT: usize = ACTIVE_CRITERIA + 1;

/// A selected criterion with its pivot colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ActiveCriterion {
    pub criterion: &'static Criterion,
    pub pivots: Option<Pivots>,
}

impl ActiveCriterion {
    #[must_use]
    pub fn new(criterion: &'static Criterion, pivots: Option<Pivots>) -> Self {
        Self { criterion, pivots }
    }

    /// Identifier of the underlying criterion.
    #[must_use]
    pub fn id(&self) -> CriterionId {
        self.criterion.id
    }

    /// Evaluate against a flash sequence.
    #[must_use]
    pub fn matches(&self, sequence: &[u8], arrangement: &ColorArrangement) -> bool {
        self.criterion
            .matches_colors(sequence, self.pivots.as_ref(), arrangement)
    }

    /// Rule text for this row.
    #[must_use]
    pub fn describe(&self, row: usize) -> String {
        self.criterion.describe(row, self.pivots.as_ref())
    }
}

/// The concrete rule set for one seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleSeedConfig {
    /// Seed this configuration was generated from.
    pub seed: i64,

    /// First-table rows in evaluation order; the last is always the default.
    pub active_criteria: [ActiveCriterion; ROW_COUNT],

    /// Comparison direction of every environment predicate.
    pub threshold_mode: ThresholdMode,

    /// Environment predicate labelling each second-table row.
    pub environment_order: [EnvironmentPredicate; COLOR_COUNT],

    pub cross_ref_table: CrossRefTable,

    pub second_table: SecondTable,

    pub second_table_alphabet: [char; COLOR_COUNT],

    /// Flash index whose color selects the cross-reference column, per stage.
    pub stage_column_positions: [usize; STAGE_COUNT],
}

impl RuleSeedConfig {
    /// The hardcoded rule set of seed 1.
    #[must_use]
    pub fn canonical() -> Self {
        let pick = |id: CriterionId| -> &'static Criterion { &CATALOG[id.raw() as usize] };

        Self {
            seed: CANONICAL_RULE_SEED,
            active_criteria: [
                ActiveCriterion::new(pick(TWO_OPPOSITE_MISSING), None),
                ActiveCriterion::new(
                    pick(AT_MOST_ONE_OF_PIVOTS),
                    Some([Color::Red, Color::Green, Color::Blue]),
                ),
                ActiveCriterion::new(pick(THREE_ADJACENT_CLOCKWISE), None),
                ActiveCriterion::new(pick(FLASH_ADJACENT_RETURN), None),
                ActiveCriterion::new(pick(TWO_ADJACENT_CLOCKWISE), None),
                ActiveCriterion::new(CriterionPool::new().otherwise(), None),
            ],
            threshold_mode: ThresholdMode::AtLeast,
            environment_order: EnvironmentPredicate::all(ThresholdMode::AtLeast),
            cross_ref_table: CANONICAL_CROSS_REF,
            second_table: CANONICAL_SECOND_TABLE,
            second_table_alphabet: SECOND_TABLE_ALPHABET,
            stage_column_positions: CANONICAL_COLUMN_POSITIONS,
        }
    }

    /// Whether this is the canonical rule set.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.seed == CANONICAL_RULE_SEED
    }

    /// Second-table rows whose environment predicate holds, top to bottom.
    #[must_use]
    pub fn active_rows(&self, snapshot: &EnvironmentSnapshot) -> SmallVec<[usize; COLOR_COUNT]> {
        self.environment_order
            .iter()
            .enumerate()
            .filter(|(_, predicate)| predicate.holds(snapshot))
            .map(|(row, _)| row)
            .collect()
    }

    /// Second-table column labelled by `letter` in this rule set.
    #[must_use]
    pub fn letter_column(&self, letter: char) -> Option<usize> {
        self.second_table_alphabet.iter().position(|&l| l == letter)
    }

    /// Rule text of every first-table row.
    #[must_use]
    pub fn criterion_descriptions(&self) -> Vec<String> {
        self.active_criteria
            .iter()
            .enumerate()
            .map(|(row, active)| active.describe(row))
            .collect()
    }

    /// Rule text of every second-table row.
    #[must_use]
    pub fn environment_descriptions(&self) -> Vec<String> {
        self.environment_order.iter().map(ToString::to_string).collect()
    }
}

/// Builds `RuleSeedConfig`s from integer seeds.
///
/// ## Example
///
/// ```
/// use simon_screams::rules::{RuleSeedConfig, RuleSeedGenerator};
///
/// let generator = RuleSeedGenerator::new();
/// assert_eq!(generator.generate(1), RuleSeedConfig::canonical());
///
/// let config = generator.generate(4242);
/// assert_eq!(config, generator.generate(4242));
/// assert!(config.active_criteria[5].criterion.is_otherwise());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleSeedGenerator {
    pool: CriterionPool,
}

impl RuleSeedGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the rule set for a seed.
    ///
    /// Every `i64` is accepted. Seed 1 returns the canonical rule set.
    #[must_use]
    pub fn generate(&self, seed: i64) -> RuleSeedConfig {
        if seed == CANONICAL_RULE_SEED {
            debug!(rule_seed = seed, "using canonical rule set");
            return RuleSeedConfig::canonical();
        }

        let mut rng = PuzzleRng::from_rule_seed(seed);
        let skipped = rng.warm_up();

        let active_criteria = self.draw_criteria(&mut rng);

        let threshold_mode = if rng.gen_bool(0.5) {
            ThresholdMode::AtLeast
        } else {
            ThresholdMode::AtMost
        };
        let mut environment_order = self.pool.environment_predicates(threshold_mode);
        rng.shuffle(&mut environment_order);

        let cross_ref_table = permute_cross_ref(&mut rng);
        let stage_column_positions = draw_column_positions(&mut rng);
        let second_table = permute_second_table(&mut rng);

        debug!(
            rule_seed = seed,
            warm_up = skipped,
            mode = ?threshold_mode,
            positions = ?stage_column_positions,
            "generated rule set"
        );

        RuleSeedConfig {
            seed,
            active_criteria,
            threshold_mode,
            environment_order,
            cross_ref_table,
            second_table,
            second_table_alphabet: SECOND_TABLE_ALPHABET,
            stage_column_positions,
        }
    }

    fn draw_criteria(&self, rng: &mut PuzzleRng) -> [ActiveCriterion; ROW_COUNT] {
        // Selection is uniform over the catalog; weight only orders the rows.
        let mut candidates: Vec<&'static Criterion> = self.pool.catalog().iter().collect();
        rng.shuffle(&mut candidates);
        candidates.truncate(ACTIVE_CRITERIA);
        candidates.sort_by_key(|c| c.weight);

        let mut rows = [ActiveCriterion::new(self.pool.otherwise(), None); ROW_COUNT];
        for (slot, criterion) in rows.iter_mut().zip(candidates) {
            let pivots = if criterion.requires_pivots {
                Some(draw_pivots(rng))
            } else {
                None
            };
            *slot = ActiveCriterion::new(criterion, pivots);
        }
        rows
    }
}

fn draw_pivots(rng: &mut PuzzleRng) -> Pivots {
    let mut colors = Color::ALL;
    rng.shuffle(&mut colors);
    [colors[0], colors[1], colors[2]]
}

fn permute_cross_ref(rng: &mut PuzzleRng) -> CrossRefTable {
    let mut row_perms = [[0usize; COLOR_COUNT]; STAGE_COUNT];
    let mut col_perms = [[0usize; COLOR_COUNT]; STAGE_COUNT];
    for stage in 0..STAGE_COUNT {
        row_perms[stage] = rng.permutation();
        col_perms[stage] = rng.permutation();
    }

    std::array::from_fn(|r| {
        std::array::from_fn(|c| {
            CrossRefCode(std::array::from_fn(|s| {
                CANONICAL_CROSS_REF[row_perms[s][r]][col_perms[s][c]].0[s]
            }))
        })
    })
}

fn draw_column_positions(rng: &mut PuzzleRng) -> [usize; STAGE_COUNT] {
    let mut positions = [0usize; STAGE_COUNT];
    let mut lowest = 0;
    for (slot, &limit) in positions.iter_mut().zip(COLUMN_POSITION_LIMITS.iter()) {
        *slot = rng.gen_range_inclusive(lowest..=limit);
        lowest = *slot + 1;
    }
    positions
}

fn permute_second_table(rng: &mut PuzzleRng) -> SecondTable {
    let row_perm: [usize; COLOR_COUNT] = rng.permutation();
    let col_perm: [usize; COLOR_COUNT] = rng.permutation();
    std::array::from_fn(|r| std::array::from_fn(|c| CANONICAL_SECOND_TABLE[row_perm[r]][col_perm[c]]))
}

/// Whether every cross-reference letter is in the alphabet.
#[must_use]
pub fn cross_ref_is_well_formed(table: &CrossRefTable) -> bool {
    table
        .iter()
        .flatten()
        .all(|code| code.0.iter().all(|&l| alphabet_index(l).is_some()))
}
