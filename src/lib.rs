//! # simon-screams
//!
//! A rule-seeded button puzzle engine.
//!
//! Six buttons sit on a hexagon. Each session shows three nested flash
//! sequences; the player classifies each sequence against a table of
//! criteria, looks up a code in a cross-reference table, and presses the
//! colors named by a second table filtered through the host's environment.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Everything derives from two seeds. The rule seed
//!    fixes the tables, the session seed fixes colors and flashes.
//!
//! 2. **Position Arithmetic**: Criteria reason about button positions, never
//!    colors. Colors only appear through the arrangement.
//!
//! 3. **Host-Agnostic**: The environment is read through a trait, once, at
//!    activation. Rendering, audio, and timers stay with the host.
//!
//! ## Modules
//!
//! - `core`: Colors, geometry, RNG, configuration, errors
//! - `criteria`: Criterion catalog and environment predicates
//! - `rules`: Rule-seed synthesis, canonical tables, manual rendering
//! - `sequence`: Flash sequence generation
//! - `resolve`: Classification and two-table lookup
//! - `verify`: Press verification state machine
//! - `session`: Orchestration and presentation events

pub mod core;
pub mod criteria;
pub mod rules;
pub mod sequence;
pub mod resolve;
pub mod verify;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorArrangement, COLOR_COUNT,
    PuzzleRng,
    SequenceConfig, SessionConfig, CANONICAL_RULE_SEED, STAGE_COUNT,
    EngineError, EngineResult,
};

pub use crate::criteria::{
    Criterion, CriterionId, CriterionPool, Pivots,
    EnvironmentFeature, EnvironmentPredicate, EnvironmentSnapshot, EnvironmentSource,
    ThresholdMode, ENVIRONMENT_THRESHOLD,
};

pub use crate::rules::{
    ActiveCriterion, RuleSeedConfig, RuleSeedGenerator,
    CrossRefCode, Manual, render_manual,
};

pub use crate::sequence::{FlashSequence, FlashSequences, SequenceGenerator};

pub use crate::resolve::{classify, Classifier, ExpectedInput, StageResolution, TableResolver};

pub use crate::verify::{InputVerifier, PressResult, VerifierState};

pub use crate::session::{EngineEvent, RuleSummary, Session};
