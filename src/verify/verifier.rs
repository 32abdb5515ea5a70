//! Press verification state machine.
//!
//! States are `Waiting(stage, position)` and the terminal `Solved`. A wrong
//! press is a strike and sends the stage back to its first press; the stage
//! itself never goes backwards.
//!
//! Stages with no required presses complete on their own, so a press is
//! never checked against an empty stage.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Color, STAGE_COUNT};
use crate::resolve::ExpectedInput;

/// Outcome of one press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressResult {
    /// Wrong color; progress in the stage is reset.
    Strike,
    /// Correct color, stage not finished.
    Advance,
    /// Correct color, stage finished, more stages remain.
    StageComplete,
    /// Correct color, last stage finished.
    Solved,
}

/// Mutable verifier progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierState {
    pub stage: usize,
    pub position: usize,
    pub solved: bool,
}

/// Checks presses against the expected input.
#[derive(Clone, Debug)]
pub struct InputVerifier {
    expected: ExpectedInput,
    state: VerifierState,
}

impl InputVerifier {
    /// Start at stage 0, skipping any leading empty stages.
    #[must_use]
    pub fn new(expected: ExpectedInput) -> Self {
        let mut verifier = Self {
            expected,
            state: VerifierState::default(),
        };
        verifier.skip_empty_stages();
        verifier
    }

    #[must_use]
    pub fn state(&self) -> VerifierState {
        self.state
    }

    #[must_use]
    pub fn expected(&self) -> &ExpectedInput {
        &self.expected
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.solved
    }

    /// Color the next press must be; `None` once solved.
    #[must_use]
    pub fn expected_next(&self) -> Option<Color> {
        if self.state.solved {
            return None;
        }
        self.expected
            .stage(self.state.stage)
            .get(self.state.position)
            .copied()
    }

    /// Handle one press.
    ///
    /// Returns `None` after the puzzle is solved: further presses are
    /// ignored.
    pub fn on_press(&mut self, color: Color) -> Option<PressResult> {
        let expected = self.expected_next()?;

        if color != expected {
            info!(
                stage = self.state.stage,
                position = self.state.position,
                pressed = %color,
                expected = %expected,
                "strike"
            );
            self.state.position = 0;
            return Some(PressResult::Strike);
        }

        self.state.position += 1;
        if self.state.position < self.expected.stage_len(self.state.stage) {
            debug!(stage = self.state.stage, position = self.state.position, "advance");
            return Some(PressResult::Advance);
        }

        debug!(stage = self.state.stage, "stage complete");
        self.state.stage += 1;
        self.state.position = 0;
        self.skip_empty_stages();

        if self.state.solved {
            info!("solved");
            Some(PressResult::Solved)
        } else {
            Some(PressResult::StageComplete)
        }
    }

    /// Clear progress in the current stage without a strike.
    pub fn reset_progress(&mut self) {
        if !self.state.solved {
            self.state.position = 0;
        }
    }

    fn skip_empty_stages(&mut self) {
        while self.state.stage < STAGE_COUNT && self.expected.stage_len(self.state.stage) == 0 {
            self.state.stage += 1;
        }
        if self.state.stage >= STAGE_COUNT {
            self.state.stage = STAGE_COUNT;
            self.state.solved = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn verifier(stages: [&[Color]; STAGE_COUNT]) -> InputVerifier {
        InputVerifier::new(ExpectedInput::from_slices(stages))
    }

    #[test]
    fn test_stage_sequencing() {
        let mut v = verifier([&[Red, Blue, Yellow], &[Green], &[Purple]]);

        assert_eq!(v.on_press(Red), Some(PressResult::Advance));
        assert_eq!(v.on_press(Blue), Some(PressResult::Advance));
        assert_eq!(v.on_press(Yellow), Some(PressResult::StageComplete));
        assert_eq!(v.state(), VerifierState { stage: 1, position: 0, solved: false });
    }

    #[test]
    fn test_strike_resets_position() {
        let mut v = verifier([&[Red, Blue, Yellow], &[Green], &[Purple]]);

        assert_eq!(v.on_press(Red), Some(PressResult::Advance));
        assert_eq!(v.on_press(Green), Some(PressResult::Strike));
        assert_eq!(v.state().position, 0);
        assert_eq!(v.expected_next(), Some(Red));
    }

    #[test]
    fn test_strike_keeps_stage() {
        let mut v = verifier([&[Red], &[Green, Blue], &[Purple]]);

        assert_eq!(v.on_press(Red), Some(PressResult::StageComplete));
        assert_eq!(v.on_press(Green), Some(PressResult::Advance));
        assert_eq!(v.on_press(Orange), Some(PressResult::Strike));
        assert_eq!(v.state(), VerifierState { stage: 1, position: 0, solved: false });
    }

    #[test]
    fn test_full_solve() {
        let mut v = verifier([&[Red], &[Green], &[Purple, Orange]]);

        assert_eq!(v.on_press(Red), Some(PressResult::StageComplete));
        assert_eq!(v.on_press(Green), Some(PressResult::StageComplete));
        assert_eq!(v.on_press(Purple), Some(PressResult::Advance));
        assert_eq!(v.on_press(Orange), Some(PressResult::Solved));
        assert!(v.is_solved());
        assert_eq!(v.state().stage, STAGE_COUNT);
    }

    #[test]
    fn test_press_after_solved_is_ignored() {
        let mut v = verifier([&[Red], &[Red], &[Red]]);
        for _ in 0..3 {
            v.on_press(Red);
        }
        assert!(v.is_solved());
        assert_eq!(v.on_press(Blue), None);
        assert_eq!(v.expected_next(), None);
    }

    #[test]
    fn test_all_stages_empty_is_solved_immediately() {
        let v = verifier([&[], &[], &[]]);
        assert!(v.is_solved());
        assert_eq!(v.expected_next(), None);
    }

    #[test]
    fn test_empty_middle_stage_is_skipped() {
        let mut v = verifier([&[Red], &[], &[Blue]]);
        assert_eq!(v.on_press(Red), Some(PressResult::StageComplete));
        assert_eq!(v.state().stage, 2);
        assert_eq!(v.on_press(Blue), Some(PressResult::Solved));
    }

    #[test]
    fn test_empty_last_stage_completes_with_previous() {
        let mut v = verifier([&[Red], &[Blue], &[]]);
        assert_eq!(v.on_press(Red), Some(PressResult::StageComplete));
        assert_eq!(v.on_press(Blue), Some(PressResult::Solved));
    }

    #[test]
    fn test_reset_progress() {
        let mut v = verifier([&[Red, Blue], &[Green], &[Purple]]);
        v.on_press(Red);
        assert_eq!(v.state().position, 1);

        v.reset_progress();
        assert_eq!(v.state(), VerifierState { stage: 0, position: 0, solved: false });
        assert_eq!(v.on_press(Red), Some(PressResult::Advance));
    }
}
