//! Session configuration types.
//!
//! Hosts configure a session at construction by providing:
//! - `SequenceConfig`: Length bounds for the nested flash sequences
//! - `SessionConfig`: Rule seed, session seed, and sequence bounds
//!
//! Everything else (stage count, table sizes, thresholds) is fixed by the
//! puzzle and exposed as constants.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Number of stages in a session.
pub const STAGE_COUNT: usize = 3;

/// Rule seed that reproduces the canonical rule set.
pub const CANONICAL_RULE_SEED: i64 = 1;

/// Length bounds for the shared flash sequence.
///
/// Stage 0 has `min_initial_length..=max_initial_length` flashes; each later
/// stage adds `min_extra_length..=max_extra_length` more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Shortest stage-0 sequence.
    pub min_initial_length: usize,

    /// Longest stage-0 sequence.
    pub max_initial_length: usize,

    /// Fewest flashes added per later stage.
    pub min_extra_length: usize,

    /// Most flashes added per later stage.
    pub max_extra_length: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            min_initial_length: 3,
            max_initial_length: 5,
            min_extra_length: 1,
            max_extra_length: 2,
        }
    }
}

impl SequenceConfig {
    /// Set the stage-0 length bounds.
    #[must_use]
    pub fn with_initial_length(mut self, min: usize, max: usize) -> Self {
        self.min_initial_length = min;
        self.max_initial_length = max;
        self
    }

    /// Set the per-stage growth bounds.
    #[must_use]
    pub fn with_extra_length(mut self, min: usize, max: usize) -> Self {
        self.min_extra_length = min;
        self.max_extra_length = max;
        self
    }

    /// Check the bounds.
    ///
    /// Stage 0 needs at least three flashes and each stage must grow by at
    /// least one; rule seeds pick column positions up to index `2 + stage`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.min_initial_length < 3 {
            return Err(EngineError::InvalidSequenceConfig {
                reason: "stage 0 needs at least three flashes",
            });
        }
        if self.min_extra_length < 1 {
            return Err(EngineError::InvalidSequenceConfig {
                reason: "each stage must add at least one flash",
            });
        }
        if self.min_initial_length > self.max_initial_length {
            return Err(EngineError::InvalidSequenceConfig {
                reason: "initial length bounds are inverted",
            });
        }
        if self.min_extra_length > self.max_extra_length {
            return Err(EngineError::InvalidSequenceConfig {
                reason: "extra length bounds are inverted",
            });
        }
        Ok(())
    }

    /// Longest possible shared sequence.
    #[must_use]
    pub fn max_total_length(&self) -> usize {
        self.max_initial_length + (STAGE_COUNT - 1) * self.max_extra_length
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Rule seed selecting criteria, predicates, and tables.
    pub rule_seed: i64,

    /// Seed for the color arrangement and flash sequence.
    pub session_seed: u64,

    /// Flash sequence length bounds.
    pub sequence: SequenceConfig,
}

impl SessionConfig {
    /// Create a configuration with a fresh random session seed.
    pub fn new(rule_seed: i64) -> Self {
        Self {
            rule_seed,
            session_seed: rand::random(),
            sequence: SequenceConfig::default(),
        }
    }

    /// Pin the session seed (replays, tests).
    #[must_use]
    pub fn with_session_seed(mut self, seed: u64) -> Self {
        self.session_seed = seed;
        self
    }

    /// Override the sequence bounds.
    #[must_use]
    pub fn with_sequence(mut self, sequence: SequenceConfig) -> Self {
        self.sequence = sequence;
        self
    }

    /// Whether this session uses the canonical rule set.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.rule_seed == CANONICAL_RULE_SEED
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(CANONICAL_RULE_SEED)
    }
}
