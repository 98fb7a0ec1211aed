//! Long-lived universe handle
//!
//! A [`Universe`] owns exactly one [`Grid`] and is either live or destroyed.
//! Release happens exactly once: whichever of an explicit
//! [`destroy`](Universe::destroy) or `Drop` comes first frees the grid, and
//! the other becomes a no-op. Every operation on a destroyed universe fails
//! with `InvalidHandle`.

use crate::error::{Result, SimulationError};
use crate::rng::RandomSource;
use crate::sampling::non_negative;

use super::grid::{Grid, StepOutcome};

#[derive(Debug)]
enum State {
    Live(Grid),
    Destroyed,
}

/// Toroidal universe handle.
///
/// Move-only: there is no `Clone`, so the grid has a single owner.
///
/// # Example
/// ```
/// use toroidal_sim_core::{HostRng, Universe};
///
/// let mut host = HostRng::new(7);
/// let mut universe = Universe::create(&[1, 2, 3, 4], 2, 2).unwrap();
///
/// universe.update(&mut host.acquire()).unwrap();
/// assert_eq!(universe.get().unwrap().len(), 4);
///
/// assert!(universe.destroy());
/// assert!(!universe.destroy());
/// assert!(universe.get().is_err());
/// ```
#[derive(Debug)]
pub struct Universe {
    state: State,
    nr: usize,
    nc: usize,
    steps: u64,
}

impl Universe {
    /// Create a live universe from a column-major copy of `initial`.
    ///
    /// The caller's slice is copied; the universe never aliases it.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the dimensions are zero or overflow, or if
    /// `initial.len() != nr * nc`.
    pub fn create(initial: &[i32], nr: usize, nc: usize) -> Result<Self> {
        Ok(Self::from_grid(Grid::new(initial.to_vec(), nr, nc)?))
    }

    pub(crate) fn from_grid(grid: Grid) -> Self {
        Self {
            nr: grid.nr(),
            nc: grid.nc(),
            state: State::Live(grid),
            steps: 0,
        }
    }

    /// One in-place propagation step.
    ///
    /// # Errors
    ///
    /// `InvalidHandle` if the universe was destroyed.
    pub fn update<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<StepOutcome> {
        let grid = self.grid_mut("update")?;
        let outcome = grid.step(rng);
        self.steps += 1;
        Ok(outcome)
    }

    /// `k` in-place propagation steps. Returns the number of steps taken.
    ///
    /// # Errors
    ///
    /// `InvalidHandle` if destroyed, `InvalidArgument` if `k` is negative.
    /// Both are checked before the first draw.
    pub fn update_n<R: RandomSource + ?Sized>(&mut self, rng: &mut R, k: i64) -> Result<u64> {
        let grid = self.grid_mut("update")?;
        let k = non_negative(k, "steps")?;
        for _ in 0..k {
            grid.step(rng);
        }
        self.steps += k;
        Ok(k)
    }

    /// Copy of the flat grid, in the order `create` received it.
    ///
    /// # Errors
    ///
    /// `InvalidHandle` if the universe was destroyed.
    pub fn get(&self) -> Result<Vec<i32>> {
        Ok(self.grid("get")?.cells().to_vec())
    }

    /// Value at row `i`, column `j`.
    ///
    /// # Errors
    ///
    /// `InvalidHandle` if destroyed, `InvalidArgument` if out of bounds.
    pub fn cell(&self, i: usize, j: usize) -> Result<i32> {
        self.grid("cell")?.cell(i, j).ok_or_else(|| {
            SimulationError::invalid_argument(format!(
                "cell ({}, {}) outside {}x{} grid",
                i, j, self.nr, self.nc
            ))
        })
    }

    /// Hex SHA-256 of the current grid.
    ///
    /// # Errors
    ///
    /// `InvalidHandle` if the universe was destroyed.
    pub fn fingerprint(&self) -> Result<String> {
        Ok(self.grid("fingerprint")?.fingerprint())
    }

    /// `(nr, nc)`; still available after destroy.
    pub fn dims(&self) -> (usize, usize) {
        (self.nr, self.nc)
    }

    /// Total steps applied since creation.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_live(&self) -> bool {
        matches!(self.state, State::Live(_))
    }

    /// Release the grid. Returns `true` if this call released it.
    pub fn destroy(&mut self) -> bool {
        match std::mem::replace(&mut self.state, State::Destroyed) {
            State::Live(grid) => {
                drop(grid);
                true
            }
            State::Destroyed => false,
        }
    }

    fn grid(&self, op: &str) -> Result<&Grid> {
        match &self.state {
            State::Live(grid) => Ok(grid),
            State::Destroyed => Err(destroyed(op)),
        }
    }

    fn grid_mut(&mut self, op: &str) -> Result<&mut Grid> {
        match &mut self.state {
            State::Live(grid) => Ok(grid),
            State::Destroyed => Err(destroyed(op)),
        }
    }
}

impl Drop for Universe {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn destroyed(op: &str) -> SimulationError {
    SimulationError::invalid_handle(format!("{} called on a destroyed universe", op))
}

/// Copy-in/copy-out stepping: apply `n` steps to a copy of `cells` and
/// return the result.
///
/// Uses the same in-place step as [`Universe::update`]; the input is never
/// modified.
///
/// # Errors
///
/// `InvalidArgument` for a bad shape or a negative `n`.
pub fn step_copy<R: RandomSource + ?Sized>(
    rng: &mut R,
    cells: &[i32],
    nr: usize,
    nc: usize,
    n: i64,
) -> Result<Vec<i32>> {
    let mut grid = Grid::new(cells.to_vec(), nr, nc)?;
    let n = non_negative(n, "n")?;
    for _ in 0..n {
        grid.step(rng);
    }
    Ok(grid.into_cells())
}
