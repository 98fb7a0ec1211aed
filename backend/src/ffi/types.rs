//! Type conversion utilities for the FFI boundary

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::SimulationError;
use crate::sampling::{count_from_host, count_from_host_int};

impl From<SimulationError> for PyErr {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
            SimulationError::InvalidHandle(_) => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Extract a count argument the way the host coerces numbers to integers.
///
/// Ints and floats share the host's 32-bit integer range: anything outside
/// it, and i32::MIN itself, is missing. Floats are truncated toward zero.
///
/// # Errors
///
/// Returns PyValueError if the value is neither an int nor a float, or if
/// coercion yields a missing value.
pub fn extract_count(value: &Bound<'_, PyAny>, name: &str) -> PyResult<i64> {
    if let Ok(n) = value.extract::<i64>() {
        return Ok(count_from_host_int(n)?);
    }
    match value.extract::<f64>() {
        Ok(x) => Ok(count_from_host(x)?),
        Err(_) => Err(PyValueError::new_err(format!(
            "Expected a scalar number for '{}'",
            name
        ))),
    }
}
