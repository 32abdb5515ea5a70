//! Session orchestration and presentation events.
//!
//! `Session` strings the components together in the required order and
//! records an `EngineEvent` for everything the presentation layer shows:
//! the color arrangement, the flash sequences, the rule summary, the
//! expected input, and each press result.

mod events;
mod state;

pub use events::{EngineEvent, RuleSummary};
pub use state::Session;
