//! Flash sequence generation.
//!
//! A session draws one shared sequence of positions; each stage replays a
//! prefix of it, longer than the previous stage's. The first flash is uniform
//! over the six positions and every later flash is uniform over the five
//! positions different from the one before it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, ColorArrangement, EngineResult, PuzzleRng, SequenceConfig, COLOR_COUNT, STAGE_COUNT};

/// Positions flashed in one stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashSequence(SmallVec<[u8; 12]>);

impl FlashSequence {
    /// Build from explicit positions (each taken modulo 6).
    #[must_use]
    pub fn from_positions(positions: &[u8]) -> Self {
        Self(positions.iter().map(|&p| p % COLOR_COUNT as u8).collect())
    }

    /// Flashed positions in order.
    #[must_use]
    pub fn positions(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position at a flash index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Flashed colors in order.
    #[must_use]
    pub fn colors(&self, arrangement: &ColorArrangement) -> Vec<Color> {
        self.0.iter().map(|&p| arrangement.color_at(p)).collect()
    }
}

/// The nested flash sequences of all stages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashSequences([FlashSequence; STAGE_COUNT]);

impl FlashSequences {
    /// Build from one shared sequence and the per-stage lengths.
    ///
    /// Lengths are clamped to the shared sequence.
    #[must_use]
    pub fn from_prefixes(shared: &[u8], lengths: [usize; STAGE_COUNT]) -> Self {
        Self(std::array::from_fn(|stage| {
            FlashSequence::from_positions(&shared[..lengths[stage].min(shared.len())])
        }))
    }

    /// Sequence for a stage.
    #[must_use]
    pub fn stage(&self, stage: usize) -> Option<&FlashSequence> {
        self.0.get(stage)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlashSequence> {
        self.0.iter()
    }

    /// The longest (last-stage) sequence.
    #[must_use]
    pub fn full(&self) -> &FlashSequence {
        &self.0[STAGE_COUNT - 1]
    }
}

/// Draws the flash sequences for a session.
#[derive(Clone, Debug, Default)]
pub struct SequenceGenerator {
    config: SequenceConfig,
}

impl SequenceGenerator {
    /// Create a generator; fails on invalid bounds.
    pub fn new(config: SequenceConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Draw stage lengths and the shared sequence.
    pub fn generate(&self, rng: &mut PuzzleRng) -> FlashSequences {
        let mut lengths = [0usize; STAGE_COUNT];
        lengths[0] = rng.gen_range_inclusive(self.config.min_initial_length..=self.config.max_initial_length);
        for stage in 1..STAGE_COUNT {
            let extra = rng.gen_range_inclusive(self.config.min_extra_length..=self.config.max_extra_length);
            lengths[stage] = lengths[stage - 1] + extra;
        }

        let total = lengths[STAGE_COUNT - 1];
        debug_assert!(total <= self.config.max_total_length());
        let mut shared: Vec<u8> = Vec::with_capacity(self.config.max_total_length());
        for _ in 0..total {
            let next = match shared.last() {
                None => rng.gen_range_usize(0..COLOR_COUNT) as u8,
                // Skip over the previous position: uniform over the other five.
                Some(&prev) => ((prev as usize + 1 + rng.gen_range_usize(0..COLOR_COUNT - 1)) % COLOR_COUNT) as u8,
            };
            shared.push(next);
        }

        FlashSequences::from_prefixes(&shared, lengths)
    }
}
