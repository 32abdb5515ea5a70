//! Core engine types: colors, positions, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every other module.
//! Nothing here knows about criteria or tables.

pub mod color;
pub mod rng;
pub mod config;
pub mod error;

pub use color::{clockwise, counter_clockwise, is_adjacent, opposite, Color, ColorArrangement, COLOR_COUNT};
pub use rng::PuzzleRng;
pub use config::{SequenceConfig, SessionConfig, CANONICAL_RULE_SEED, STAGE_COUNT};
pub use error::{EngineError, EngineResult};
