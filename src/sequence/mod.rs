//! Flash sequences.
//!
//! Sequences are independent of the rule seed: they come from the session's
//! own random stream.

pub mod generator;

pub use generator::{FlashSequence, FlashSequences, SequenceGenerator};
