//! Toroidal Simulation Core - Rust Engine
//!
//! Random samplers and a toroidal grid simulation exposed to embedding hosts
//! with deterministic execution.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation and host RNG scopes
//! - **sampling**: Cauchy draws and the π rejection sampler
//! - **universe**: Toroidal grid, propagation step, handles and registry
//! - **events**: Lifecycle event log
//! - **config**: JSON run configuration
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG) and flows through one
//!    RNG scope per public call
//! 2. Arguments are validated before any mutation or draw
//! 3. A universe's grid is released exactly once
//! 4. FFI boundary is minimal and safe: hosts get copies, never references

// Module declarations
pub mod config;
pub mod error;
pub mod events;
pub mod rng;
pub mod sampling;
pub mod universe;

// Re-exports for convenience
pub use config::{SimulationConfig, SimulationRun};
pub use error::SimulationError;
pub use events::{Event, EventLog};
pub use rng::{HostRng, RandomSource, RngManager, RngScope};
pub use sampling::{estimate_pi, sample_cauchy, sample_cauchy_batch};
pub use universe::{step_copy, wrap, Grid, StepOutcome, Universe, UniverseHandle, UniverseRegistry};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn toroidal_sim_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::rng::PyRng>()?;
    m.add_class::<ffi::universe::PyUniverse>()?;
    m.add_function(wrap_pyfunction!(ffi::sampling::py_sample_cauchy, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::sampling::py_sample_cauchy_batch, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::sampling::py_estimate_pi, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::universe::py_step_copy, m)?)?;
    Ok(())
}
