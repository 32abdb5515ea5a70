//! Python bindings for the simon-screams puzzle engine.
//!
//! # Quick Start
//!
//! ```python
//! import simon_screams as ss
//!
//! # Canonical rules, fixed session seed
//! session = ss.Session(rule_seed=1, session_seed=42)
//! print(session.manual())
//!
//! # Resolve against the host environment
//! expected = session.activate(ss.Environment(batteries=4, ports=3))
//!
//! # Replay the expected input
//! for stage in expected:
//!     for color in stage:
//!         session.press(color)
//! assert session.is_solved
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// simon_screams: a rule-seeded button puzzle engine.
#[pymodule]
fn simon_screams(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEnvironment>()?;
    m.add_class::<PySession>()?;

    Ok(())
}
