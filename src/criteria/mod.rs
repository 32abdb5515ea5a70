//! Classification criteria and environment predicates.
//!
//! - `criterion`: the uniform rule record shared by every catalog entry
//! - `catalog`: the static list of selectable criteria
//! - `environment`: host counts, threshold predicates, and the host trait
//! - `pool`: catalog lookup

pub mod criterion;
pub mod catalog;
pub mod environment;
pub mod pool;

pub use criterion::{Criterion, CriterionId, Pivots, PredicateFn};
pub use catalog::{CATALOG, CATALOG_SIZE};
pub use environment::{
    EnvironmentFeature, EnvironmentPredicate, EnvironmentSnapshot, EnvironmentSource,
    ThresholdMode, ENVIRONMENT_THRESHOLD,
};
pub use pool::CriterionPool;
