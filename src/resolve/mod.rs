//! Classification and table lookup.
//!
//! - `classifier`: first-match row selection over the active criteria
//! - `resolver`: cross-reference and second-table lookup per stage

pub mod classifier;
pub mod resolver;

pub use classifier::{classify, Classifier};
pub use resolver::{ExpectedInput, StageInput, StageResolution, TableResolver};
