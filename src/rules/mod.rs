//! Rule-seeded rule sets.
//!
//! A rule seed reconfigures which criteria are active and how the lookup
//! tables are permuted:
//! - `tables`: cross-reference codes, the alphabet, canonical tables
//! - `seed`: `RuleSeedConfig` and the generator
//! - `manual`: text rendering of a rule set
//!
//! The rest of the engine only reads a `RuleSeedConfig`; it never looks at
//! the seed itself.

pub mod tables;
pub mod seed;
pub mod manual;

pub use tables::{
    alphabet_index, CrossRefCode, CrossRefTable, SecondTable, CANONICAL_COLUMN_POSITIONS,
    CANONICAL_CROSS_REF, CANONICAL_SECOND_TABLE, COLUMN_POSITION_LIMITS, SECOND_TABLE_ALPHABET,
};
pub use seed::{cross_ref_is_well_formed, ActiveCriterion, RuleSeedConfig, RuleSeedGenerator, ACTIVE_CRITERIA, ROW_COUNT};
pub use manual::{render_manual, Manual};
