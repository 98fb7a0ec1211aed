//! PyO3 functions for the samplers

use pyo3::prelude::*;

use super::rng::PyRng;
use super::types::extract_count;
use crate::sampling::{estimate_pi, sample_cauchy, sample_cauchy_batch};

/// One Cauchy draw.
///
/// Degenerate parameters return `location` or NaN, never raise.
#[pyfunction]
#[pyo3(name = "sample_cauchy", signature = (rng, location = 0.0, scale = 1.0))]
pub fn py_sample_cauchy(mut rng: PyRefMut<'_, PyRng>, location: f64, scale: f64) -> f64 {
    let mut scope = rng.inner.acquire();
    sample_cauchy(&mut scope, location, scale)
}

/// `n` standard Cauchy draws as a list of floats.
///
/// Raises ValueError if `n` is negative or not representable as an integer.
#[pyfunction]
#[pyo3(name = "sample_cauchy_batch")]
pub fn py_sample_cauchy_batch(
    mut rng: PyRefMut<'_, PyRng>,
    n: &Bound<'_, PyAny>,
) -> PyResult<Vec<f64>> {
    let n = extract_count(n, "n")?;
    let mut scope = rng.inner.acquire();
    Ok(sample_cauchy_batch(&mut scope, n)?)
}

/// Monte Carlo estimate of π from `n` points.
///
/// Raises ValueError if `n` is not positive.
#[pyfunction]
#[pyo3(name = "estimate_pi")]
pub fn py_estimate_pi(mut rng: PyRefMut<'_, PyRng>, n: &Bound<'_, PyAny>) -> PyResult<f64> {
    let n = extract_count(n, "n")?;
    let mut scope = rng.inner.acquire();
    Ok(estimate_pi(&mut scope, n)?)
}
