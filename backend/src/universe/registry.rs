//! Host-side handle table
//!
//! An embedding host cannot hold a Rust value directly; it holds an opaque
//! [`UniverseHandle`] instead and passes it back on every call. The registry
//! owns the universes, checks handles on every operation and keeps a bounded
//! [`EventLog`] of what happened.
//!
//! Destroyed handles are forgotten: the registry keeps no per-handle state
//! after `destroy`, so a stale handle and a never-issued one are rejected the
//! same way.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, SimulationError};
use crate::events::{Event, EventLog};
use crate::rng::RandomSource;

use super::grid::StepOutcome;
use super::handle::Universe;

/// Events retained by [`UniverseRegistry::new`].
pub const DEFAULT_EVENT_LIMIT: usize = 4096;

/// Opaque reference to a universe owned by a [`UniverseRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniverseHandle(Uuid);

impl UniverseHandle {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UniverseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "universe_{}", self.0.simple())
    }
}

/// Owns every live universe created through it.
///
/// # Example
/// ```
/// use toroidal_sim_core::{HostRng, SimulationError, UniverseRegistry};
///
/// let mut host = HostRng::new(1);
/// let mut registry = UniverseRegistry::new();
///
/// let handle = registry.create(&[1, 2, 3, 4], 2, 2).unwrap();
/// registry.update_n(handle, &mut host.acquire(), 100).unwrap();
/// let cells = registry.get(handle).unwrap();
/// assert_eq!(cells.len(), 4);
///
/// registry.destroy(handle).unwrap();
/// assert!(matches!(
///     registry.destroy(handle),
///     Err(SimulationError::InvalidHandle(_))
/// ));
/// ```
#[derive(Debug)]
pub struct UniverseRegistry {
    live: HashMap<UniverseHandle, Universe>,
    events: EventLog,
}

impl Default for UniverseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UniverseRegistry {
    pub fn new() -> Self {
        Self::with_event_limit(DEFAULT_EVENT_LIMIT)
    }

    /// Registry whose event log keeps at most `limit` recent events.
    pub fn with_event_limit(limit: usize) -> Self {
        Self {
            live: HashMap::new(),
            events: EventLog::with_limit(limit),
        }
    }

    /// Create a universe and return its handle.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a bad shape; see [`Universe::create`].
    pub fn create(&mut self, initial: &[i32], nr: usize, nc: usize) -> Result<UniverseHandle> {
        let universe = Universe::create(initial, nr, nc).map_err(|e| self.reject("create", e))?;
        Ok(self.adopt(universe))
    }

    /// Register an already-built universe.
    pub fn adopt(&mut self, universe: Universe) -> UniverseHandle {
        let handle = UniverseHandle::new();
        let (nr, nc) = universe.dims();
        let seq = self.events.next_seq();
        self.events.log(Event::UniverseCreated { seq, handle, nr, nc });
        self.live.insert(handle, universe);
        handle
    }

    /// One in-place step on the universe behind `handle`.
    ///
    /// Single steps are not logged; the step count shows up in the next
    /// batch or destroy event for the handle.
    ///
    /// # Errors
    ///
    /// `InvalidHandle` if the handle is unknown or destroyed.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        handle: UniverseHandle,
        rng: &mut R,
    ) -> Result<StepOutcome> {
        let outcome = match self.live_mut(handle, "update") {
            Ok(universe) => universe.update(rng),
            Err(e) => Err(e),
        };
        outcome.map_err(|e| self.reject("update", e))
    }

    /// `k` in-place steps on the universe behind `handle`, logged as one
    /// event.
    ///
    /// # Errors
    ///
    /// `InvalidHandle` for an unknown or destroyed handle, `InvalidArgument`
    /// for a negative `k`.
    pub fn update_n<R: RandomSource + ?Sized>(
        &mut self,
        handle: UniverseHandle,
        rng: &mut R,
        k: i64,
    ) -> Result<u64> {
        let taken = match self.live_mut(handle, "update") {
            Ok(universe) => universe.update_n(rng, k),
            Err(e) => Err(e),
        };
        let taken = taken.map_err(|e| self.reject("update", e))?;
        self.record_steps(handle, taken);
        Ok(taken)
    }

    /// Copy of the grid behind `handle`.
    ///
    /// # Errors
    ///
    /// `InvalidHandle` if the handle is unknown or destroyed.
    pub fn get(&mut self, handle: UniverseHandle) -> Result<Vec<i32>> {
        let cells = match self.live.get(&handle) {
            Some(universe) => universe.get(),
            None => Err(missing(handle, "get")),
        };
        cells.map_err(|e| self.reject("get", e))
    }

    /// Borrow the universe behind `handle` for read-only inspection.
    pub fn universe(&self, handle: UniverseHandle) -> Option<&Universe> {
        self.live.get(&handle)
    }

    /// Release the universe behind `handle`.
    ///
    /// # Errors
    ///
    /// `InvalidHandle` if the handle was already destroyed or never existed.
    /// Nothing is released in that case.
    pub fn destroy(&mut self, handle: UniverseHandle) -> Result<()> {
        let Some(mut universe) = self.live.remove(&handle) else {
            let err = missing(handle, "destroy");
            return Err(self.reject("destroy", err));
        };
        universe.destroy();
        let seq = self.events.next_seq();
        self.events.log(Event::UniverseDestroyed {
            seq,
            handle,
            total_steps: universe.steps(),
        });
        Ok(())
    }

    /// Whether `handle` refers to a live universe.
    pub fn contains(&self, handle: UniverseHandle) -> bool {
        self.live.contains_key(&handle)
    }

    /// Number of live universes.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    fn live_mut(&mut self, handle: UniverseHandle, op: &str) -> Result<&mut Universe> {
        self.live.get_mut(&handle).ok_or_else(|| missing(handle, op))
    }

    fn record_steps(&mut self, handle: UniverseHandle, steps: u64) {
        let total_steps = self.live.get(&handle).map_or(0, Universe::steps);
        let seq = self.events.next_seq();
        self.events.log(Event::UniverseStepped {
            seq,
            handle,
            steps,
            total_steps,
        });
    }

    fn reject(&mut self, operation: &str, err: SimulationError) -> SimulationError {
        let seq = self.events.next_seq();
        self.events.log(Event::CallRejected {
            seq,
            operation: operation.to_string(),
            reason: err.to_string(),
        });
        err
    }
}

fn missing(handle: UniverseHandle, op: &str) -> SimulationError {
    SimulationError::invalid_handle(format!("{}: no live universe for {}", op, handle))
}
