//! Live input verification.

pub mod verifier;

pub use verifier::{InputVerifier, PressResult, VerifierState};
