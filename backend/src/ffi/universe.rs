//! PyO3 wrapper for Universe
//!
//! The Python object owns its universe. Python's finalizer drops it, and an
//! explicit `destroy()` may come first; either way the grid is released
//! once and later calls raise RuntimeError.

use pyo3::prelude::*;

use super::rng::PyRng;
use super::types::extract_count;
use crate::universe::{step_copy, Universe};

/// Python wrapper for a toroidal universe
///
/// # Example (from Python)
///
/// ```python
/// from toroidal_sim_core import Rng, Universe
///
/// rng = Rng(1)
/// u = Universe([1, 2, 3, 4], 2, 2)
/// u.update(rng)          # one step
/// u.update(rng, 1000)    # a batch, in place
/// cells = u.get()        # a copy
/// u.destroy()
/// ```
#[pyclass(name = "Universe")]
pub struct PyUniverse {
    inner: Universe,
}

#[pymethods]
impl PyUniverse {
    /// Create a universe from column-major `cells`
    ///
    /// Raises ValueError if `len(cells) != nr * nc` or a dimension is zero.
    #[new]
    fn new(cells: Vec<i32>, nr: usize, nc: usize) -> PyResult<Self> {
        let inner = Universe::create(&cells, nr, nc)?;
        Ok(PyUniverse { inner })
    }

    /// Apply `n` steps in place (default 1); returns the number applied
    #[pyo3(signature = (rng, n = None))]
    fn update(
        &mut self,
        mut rng: PyRefMut<'_, PyRng>,
        n: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<u64> {
        let n = match n {
            Some(value) => extract_count(value, "n")?,
            None => 1,
        };
        let mut scope = rng.inner.acquire();
        Ok(self.inner.update_n(&mut scope, n)?)
    }

    /// Copy of the flat column-major grid
    fn get(&self) -> PyResult<Vec<i32>> {
        Ok(self.inner.get()?)
    }

    /// Value at row `i`, column `j`
    fn cell(&self, i: usize, j: usize) -> PyResult<i32> {
        Ok(self.inner.cell(i, j)?)
    }

    /// Hex SHA-256 of the grid
    fn fingerprint(&self) -> PyResult<String> {
        Ok(self.inner.fingerprint()?)
    }

    /// Release the grid; True only on the first call
    fn destroy(&mut self) -> bool {
        self.inner.destroy()
    }

    #[getter]
    fn dims(&self) -> (usize, usize) {
        self.inner.dims()
    }

    #[getter]
    fn steps(&self) -> u64 {
        self.inner.steps()
    }

    #[getter]
    fn is_live(&self) -> bool {
        self.inner.is_live()
    }

    fn __repr__(&self) -> String {
        let (nr, nc) = self.inner.dims();
        let state = if self.inner.is_live() { "live" } else { "destroyed" };
        format!(
            "Universe({}x{}, steps={}, {})",
            nr,
            nc,
            self.inner.steps(),
            state
        )
    }
}

/// Copy-in/copy-out stepping: returns `cells` after `n` steps
#[pyfunction]
#[pyo3(name = "step_copy")]
pub fn py_step_copy(
    mut rng: PyRefMut<'_, PyRng>,
    cells: Vec<i32>,
    nr: usize,
    nc: usize,
    n: &Bound<'_, PyAny>,
) -> PyResult<Vec<i32>> {
    let n = extract_count(n, "n")?;
    let mut scope = rng.inner.acquire();
    Ok(step_copy(&mut scope, &cells, nr, nc, n)?)
}
