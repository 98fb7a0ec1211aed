//! Toroidal universe simulation
//!
//! - **grid**: cell storage, the wrap rule and the propagation step
//! - **handle**: the owning [`Universe`] handle and copy-in/copy-out stepping
//! - **registry**: opaque handles for embedding hosts

mod grid;
mod handle;
mod registry;

pub use grid::{wrap, Grid, StepOutcome};
pub use handle::{step_copy, Universe};
pub use registry::{UniverseHandle, UniverseRegistry, DEFAULT_EVENT_LIMIT};

pub(crate) use grid::checked_len;
