//! Criterion pool for catalog lookup.
//!
//! The `CriterionPool` wraps the static catalog plus the default row and
//! provides lookup by `CriterionId`.

use super::catalog::CATALOG;
use super::criterion::{Criterion, CriterionId};
use super::environment::{EnvironmentPredicate, ThresholdMode};

static OTHERWISE: Criterion = Criterion::otherwise();

/// Lookup over the criterion catalog.
///
/// ## Example
///
/// ```
/// use simon_screams::criteria::{CriterionPool, CriterionId};
///
/// let pool = CriterionPool::new();
/// let criterion = pool.get(CriterionId::new(0)).unwrap();
/// assert_eq!(criterion.name, "three adjacent colors flashed in clockwise order");
///
/// assert!(pool.get(CriterionId::OTHERWISE).unwrap().is_otherwise());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CriterionPool;

impl CriterionPool {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Every selectable criterion (the default row excluded).
    #[must_use]
    pub fn catalog(&self) -> &'static [Criterion] {
        &CATALOG
    }

    /// The always-true default row.
    #[must_use]
    pub fn otherwise(&self) -> &'static Criterion {
        &OTHERWISE
    }

    /// Get a criterion by ID.
    #[must_use]
    pub fn get(&self, id: CriterionId) -> Option<&'static Criterion> {
        if id == CriterionId::OTHERWISE {
            return Some(&OTHERWISE);
        }
        CATALOG.get(id.raw() as usize)
    }

    /// Number of selectable criteria.
    #[must_use]
    pub fn len(&self) -> usize {
        CATALOG.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        CATALOG.is_empty()
    }

    /// The six environment predicates for a mode.
    #[must_use]
    pub fn environment_predicates(&self, mode: ThresholdMode) -> [EnvironmentPredicate; 6] {
        EnvironmentPredicate::all(mode)
    }
}
