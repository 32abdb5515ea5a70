//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Color, EngineError};
use crate::criteria::EnvironmentSnapshot;

/// Map an engine error onto `ValueError`.
pub(crate) fn to_py_err(err: EngineError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", err))
}

/// Parse a color name such as `"red"` or `"Purple"`.
pub(crate) fn parse_color(name: &str) -> PyResult<Color> {
    name.parse::<Color>().map_err(to_py_err)
}

/// Python wrapper for an environment snapshot.
///
/// Hosts fill in the counts and pass the snapshot to `Session.activate`.
#[pyclass(name = "Environment")]
#[derive(Clone, Debug)]
pub struct PyEnvironment(pub EnvironmentSnapshot);

#[pymethods]
impl PyEnvironment {
    #[new]
    #[pyo3(signature = (
        ports = 0,
        indicators = 0,
        batteries = 0,
        serial_digits = 0,
        serial_letters = 0,
        battery_holders = 0
    ))]
    fn new(
        ports: u32,
        indicators: u32,
        batteries: u32,
        serial_digits: u32,
        serial_letters: u32,
        battery_holders: u32,
    ) -> Self {
        Self(EnvironmentSnapshot {
            port_count: ports,
            indicator_count: indicators,
            battery_count: batteries,
            serial_digit_count: serial_digits,
            serial_letter_count: serial_letters,
            battery_holder_count: battery_holders,
        })
    }

    #[getter]
    fn ports(&self) -> u32 {
        self.0.port_count
    }

    #[getter]
    fn indicators(&self) -> u32 {
        self.0.indicator_count
    }

    #[getter]
    fn batteries(&self) -> u32 {
        self.0.battery_count
    }

    #[getter]
    fn serial_digits(&self) -> u32 {
        self.0.serial_digit_count
    }

    #[getter]
    fn serial_letters(&self) -> u32 {
        self.0.serial_letter_count
    }

    #[getter]
    fn battery_holders(&self) -> u32 {
        self.0.battery_holder_count
    }

    fn __repr__(&self) -> String {
        format!(
            "Environment(ports={}, indicators={}, batteries={}, serial_digits={}, serial_letters={}, battery_holders={})",
            self.0.port_count,
            self.0.indicator_count,
            self.0.battery_count,
            self.0.serial_digit_count,
            self.0.serial_letter_count,
            self.0.battery_holder_count
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
