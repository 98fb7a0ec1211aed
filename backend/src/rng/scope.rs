//! Host-owned RNG state and its per-call scope
//!
//! The host keeps one RNG state word between calls. A public entry point
//! acquires an [`RngScope`] once, draws from it for the whole call, and the
//! scope writes the advanced state back when it is dropped. Dropping covers
//! every exit path, including early returns through `?`.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::{RandomSource, RngManager};

/// RNG state owned by the embedding caller.
///
/// # Example
/// ```
/// use toroidal_sim_core::{HostRng, RandomSource};
///
/// let mut host = HostRng::new(42);
/// let before = host.state();
/// {
///     let mut scope = host.acquire();
///     scope.unif_rand();
/// }
/// assert_ne!(host.state(), before);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostRng {
    state: u64,
    scopes_acquired: u64,
}

impl HostRng {
    /// Seed a fresh host state.
    pub fn new(seed: u64) -> Self {
        Self {
            state: RngManager::new(seed).get_state(),
            scopes_acquired: 0,
        }
    }

    /// Reseed, discarding the current stream.
    pub fn set_seed(&mut self, seed: u64) {
        self.state = RngManager::new(seed).get_state();
    }

    /// Current state word (as last flushed by a scope).
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Number of scopes acquired over the lifetime of this state.
    pub fn scopes_acquired(&self) -> u64 {
        self.scopes_acquired
    }

    /// Load the state into a generator for the duration of one call.
    pub fn acquire(&mut self) -> RngScope<'_> {
        self.scopes_acquired += 1;
        let rng = RngManager::new(self.state);
        RngScope { host: self, rng }
    }
}

/// Borrowed RNG for one public call. Flushes state back on drop.
#[derive(Debug)]
pub struct RngScope<'a> {
    host: &'a mut HostRng,
    rng: RngManager,
}

impl Deref for RngScope<'_> {
    type Target = RngManager;

    fn deref(&self) -> &RngManager {
        &self.rng
    }
}

impl DerefMut for RngScope<'_> {
    fn deref_mut(&mut self) -> &mut RngManager {
        &mut self.rng
    }
}

impl RandomSource for RngScope<'_> {
    fn unif_rand(&mut self) -> f64 {
        self.rng.next_f64()
    }
}

impl Drop for RngScope<'_> {
    fn drop(&mut self) {
        self.host.state = self.rng.get_state();
    }
}
