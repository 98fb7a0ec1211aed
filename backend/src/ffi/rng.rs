//! PyO3 wrapper for the host RNG state

use pyo3::prelude::*;

use crate::rng::HostRng;

/// Explicit RNG context passed to every sampling and update call.
///
/// # Example (from Python)
///
/// ```python
/// from toroidal_sim_core import Rng, estimate_pi
///
/// rng = Rng(42)
/// print(estimate_pi(rng, 100_000))
/// ```
#[pyclass(name = "Rng")]
pub struct PyRng {
    pub(crate) inner: HostRng,
}

#[pymethods]
impl PyRng {
    #[new]
    fn new(seed: u64) -> Self {
        PyRng {
            inner: HostRng::new(seed),
        }
    }

    /// Restart the stream from `seed`
    fn set_seed(&mut self, seed: u64) {
        self.inner.set_seed(seed);
    }

    /// Current state word
    #[getter]
    fn state(&self) -> u64 {
        self.inner.state()
    }

    fn __repr__(&self) -> String {
        format!("Rng(state={})", self.inner.state())
    }
}
