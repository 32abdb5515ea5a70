//! Session bindings for Python.

use pyo3::prelude::*;

use crate::core::{SessionConfig, STAGE_COUNT};
use crate::rules::render_manual;
use crate::session::Session;
use crate::verify::PressResult;

use super::py_core::{parse_color, to_py_err, PyEnvironment};

fn press_result_name(result: PressResult) -> &'static str {
    match result {
        PressResult::Strike => "strike",
        PressResult::Advance => "advance",
        PressResult::StageComplete => "stage_complete",
        PressResult::Solved => "solved",
    }
}

/// Python wrapper for Session.
///
/// Colors cross the boundary as lowercase names.
#[pyclass(name = "Session")]
pub struct PySession {
    inner: Session,
}

#[pymethods]
impl PySession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - rule_seed: Rule seed; 1 gives the canonical manual
    /// - session_seed: Seed for colors and flashes; random if omitted
    #[new]
    #[pyo3(signature = (rule_seed = 1, session_seed = None))]
    fn new(rule_seed: i64, session_seed: Option<u64>) -> PyResult<Self> {
        let mut config = SessionConfig::new(rule_seed);
        if let Some(seed) = session_seed {
            config = config.with_session_seed(seed);
        }
        let inner = Session::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Resolve every stage against the host environment.
    ///
    /// Returns the expected presses, one list per stage.
    fn activate(&mut self, environment: &PyEnvironment) -> PyResult<Vec<Vec<&'static str>>> {
        let expected = self.inner.activate(&environment.0).map_err(to_py_err)?;
        Ok(expected
            .iter()
            .map(|stage| stage.iter().map(|c| c.name()).collect())
            .collect())
    }

    /// Press a button by color name.
    ///
    /// Returns "strike", "advance", "stage_complete", "solved", or None once
    /// the puzzle is solved.
    fn press(&mut self, color: &str) -> PyResult<Option<&'static str>> {
        let color = parse_color(color)?;
        let result = self.inner.press(color).map_err(to_py_err)?;
        Ok(result.map(press_result_name))
    }

    /// Clear progress in the current stage without a strike.
    fn reset_progress(&mut self) {
        self.inner.reset_progress();
    }

    /// Button colors, clockwise from position 0.
    #[getter]
    fn arrangement(&self) -> Vec<&'static str> {
        self.inner.arrangement().colors().iter().map(|c| c.name()).collect()
    }

    /// Flash positions for each stage.
    #[getter]
    fn sequences(&self) -> Vec<Vec<u8>> {
        self.inner
            .sequences()
            .iter()
            .map(|s| s.positions().to_vec())
            .collect()
    }

    /// Current (stage, position), or None before activation.
    #[getter]
    fn progress(&self) -> Option<(usize, usize)> {
        self.inner.verifier_state().map(|s| (s.stage.min(STAGE_COUNT), s.position))
    }

    #[getter]
    fn is_solved(&self) -> bool {
        self.inner.is_solved()
    }

    /// Recorded events as JSON strings, leaving the log empty.
    fn drain_events(&mut self) -> PyResult<Vec<String>> {
        self.inner
            .drain_events()
            .iter()
            .map(|e| {
                serde_json::to_string(e)
                    .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
            })
            .collect()
    }

    /// The rule set rendered as a manual page.
    fn manual(&self) -> String {
        render_manual(self.inner.rules())
    }

    fn __repr__(&self) -> String {
        let status = if self.inner.is_solved() {
            "solved"
        } else if self.inner.is_activated() {
            "active"
        } else {
            "pending"
        };
        format!(
            "Session(rule_seed={}, status={})",
            self.inner.config().rule_seed,
            status
        )
    }
}
