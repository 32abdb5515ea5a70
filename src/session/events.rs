//! Events emitted to the presentation layer.
//!
//! The engine never animates, plays audio or formats logs itself; it records
//! what happened and the host consumes the events.

use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorArrangement};
use crate::resolve::ExpectedInput;
use crate::rules::RuleSeedConfig;
use crate::sequence::FlashSequences;
use crate::verify::PressResult;

/// Names and order of the active rules, for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub rule_seed: i64,
    /// First-table rows, in evaluation order.
    pub criteria: Vec<String>,
    /// Second-table rows, top to bottom.
    pub environment: Vec<String>,
}

impl RuleSummary {
    #[must_use]
    pub fn from_config(config: &RuleSeedConfig) -> Self {
        Self {
            rule_seed: config.seed,
            criteria: config.criterion_descriptions(),
            environment: config.environment_descriptions(),
        }
    }
}

/// Something the presentation layer may react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    ColorArrangementChosen(ColorArrangement),
    SequenceReady(FlashSequences),
    RuleSummary(RuleSummary),
    ExpectedInputReady(ExpectedInput),
    PressResult { color: Color, result: PressResult },
    ProgressReset,
}
