//! One puzzle session, from seed to solve.
//!
//! Call order:
//!
//! 1. [`Session::new`]: rule set, color arrangement, flash sequences
//! 2. [`Session::activate`]: environment snapshot, per-stage resolution
//! 3. [`Session::press`] / [`Session::reset_progress`] until solved
//!
//! The session is single-threaded; the host serialises presses.

use tracing::{debug, info};

use crate::core::{Color, ColorArrangement, EngineError, EngineResult, PuzzleRng, SessionConfig, STAGE_COUNT};
use crate::criteria::{EnvironmentSnapshot, EnvironmentSource};
use crate::resolve::{ExpectedInput, StageResolution, TableResolver};
use crate::rules::{RuleSeedConfig, RuleSeedGenerator};
use crate::sequence::{FlashSequences, SequenceGenerator};
use crate::verify::{InputVerifier, PressResult, VerifierState};

use super::events::{EngineEvent, RuleSummary};

/// Stream label for the color arrangement.
const ARRANGEMENT_CONTEXT: &str = "arrangement";
/// Stream label for the flash sequence.
const SEQUENCE_CONTEXT: &str = "sequence";

/// Resolution results, present once the session is activated.
#[derive(Clone, Debug)]
struct Activation {
    snapshot: EnvironmentSnapshot,
    resolutions: [StageResolution; STAGE_COUNT],
    verifier: InputVerifier,
}

/// A single puzzle session.
///
/// ## Example
///
/// ```
/// use simon_screams::core::SessionConfig;
/// use simon_screams::criteria::EnvironmentSnapshot;
/// use simon_screams::session::Session;
/// use simon_screams::verify::PressResult;
///
/// let mut session = Session::new(SessionConfig::new(1).with_session_seed(42)).unwrap();
///
/// let host = EnvironmentSnapshot { battery_count: 4, ..Default::default() };
/// let expected = session.activate(&host).unwrap().clone();
///
/// for stage in expected.iter() {
///     for &color in stage {
///         session.press(color).unwrap();
///     }
/// }
/// assert!(session.is_solved());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    rules: RuleSeedConfig,
    arrangement: ColorArrangement,
    sequences: FlashSequences,
    activation: Option<Activation>,
    events: Vec<EngineEvent>,
}

impl Session {
    /// Generate the rule set, color arrangement, and flash sequences.
    pub fn new(config: SessionConfig) -> EngineResult<Self> {
        let generator = SequenceGenerator::new(config.sequence)?;
        let rules = RuleSeedGenerator::new().generate(config.rule_seed);

        let session_rng = PuzzleRng::new(config.session_seed);
        let arrangement = ColorArrangement::generate(&mut session_rng.for_context(ARRANGEMENT_CONTEXT));
        let sequences = generator.generate(&mut session_rng.for_context(SEQUENCE_CONTEXT));

        info!(
            rule_seed = config.rule_seed,
            session_seed = config.session_seed,
            "session created"
        );

        let summary = RuleSummary::from_config(&rules);
        debug!(criteria = ?summary.criteria, environment = ?summary.environment, "rule summary");

        let events = vec![
            EngineEvent::ColorArrangementChosen(arrangement),
            EngineEvent::SequenceReady(sequences.clone()),
            EngineEvent::RuleSummary(summary),
        ];

        Ok(Self {
            config,
            rules,
            arrangement,
            sequences,
            activation: None,
            events,
        })
    }

    /// Capture the environment and resolve every stage.
    ///
    /// The host is queried exactly once; a second call fails.
    pub fn activate<S: EnvironmentSource + ?Sized>(&mut self, source: &S) -> EngineResult<&ExpectedInput> {
        if self.activation.is_some() {
            return Err(EngineError::AlreadyActivated);
        }

        let snapshot = EnvironmentSnapshot::capture(source);
        let resolutions = TableResolver::new(&self.rules, &self.arrangement, &snapshot)
            .resolve_all(&self.sequences)?;
        let expected = ExpectedInput::from(&resolutions);

        info!(
            presses = ?expected.iter().map(<[Color]>::len).collect::<Vec<_>>(),
            "session activated"
        );
        self.events.push(EngineEvent::ExpectedInputReady(expected.clone()));

        let verifier = InputVerifier::new(expected);
        let activation = self.activation.insert(Activation {
            snapshot,
            resolutions,
            verifier,
        });
        Ok(activation.verifier.expected())
    }

    /// Handle one button press.
    ///
    /// Fails if the session has not been activated. Returns `Ok(None)` for
    /// presses after the puzzle is solved.
    pub fn press(&mut self, color: Color) -> EngineResult<Option<PressResult>> {
        let activation = self.activation.as_mut().ok_or(EngineError::PressBeforeReady)?;
        let result = activation.verifier.on_press(color);
        if let Some(result) = result {
            self.events.push(EngineEvent::PressResult { color, result });
        }
        Ok(result)
    }

    /// Clear progress in the current stage without a strike.
    ///
    /// Called by the presentation layer's idle timer. Does nothing before
    /// activation, after solve, or when there is no progress to clear.
    pub fn reset_progress(&mut self) {
        let Some(activation) = self.activation.as_mut() else {
            return;
        };
        let state = activation.verifier.state();
        if state.solved || state.position == 0 {
            return;
        }
        activation.verifier.reset_progress();
        debug!(stage = state.stage, "progress reset");
        self.events.push(EngineEvent::ProgressReset);
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSeedConfig {
        &self.rules
    }

    #[must_use]
    pub fn arrangement(&self) -> &ColorArrangement {
        &self.arrangement
    }

    #[must_use]
    pub fn sequences(&self) -> &FlashSequences {
        &self.sequences
    }

    #[must_use]
    pub fn is_activated(&self) -> bool {
        self.activation.is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&EnvironmentSnapshot> {
        self.activation.as_ref().map(|a| &a.snapshot)
    }

    /// Per-stage lookup details, once activated.
    #[must_use]
    pub fn resolutions(&self) -> Option<&[StageResolution; STAGE_COUNT]> {
        self.activation.as_ref().map(|a| &a.resolutions)
    }

    #[must_use]
    pub fn expected_input(&self) -> Option<&ExpectedInput> {
        self.activation.as_ref().map(|a| a.verifier.expected())
    }

    #[must_use]
    pub fn verifier_state(&self) -> Option<VerifierState> {
        self.activation.as_ref().map(|a| a.verifier.state())
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.activation
            .as_ref()
            .is_some_and(|a| a.verifier.is_solved())
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}
