//! Toroidal grid and the propagation step
//!
//! Cells are stored column-major: the cell at row `i`, column `j` lives at
//! index `i + j * nr`. Every step picks one cell and copies its value onto
//! its four cardinal neighbours, wrapping at the edges.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{Result, SimulationError};
use crate::rng::RandomSource;

/// Map a coordinate that is at most one step outside `[0, max)` back onto
/// the torus.
///
/// Only single-step shifts are ever passed in, so this is a clamp-to-wrap
/// rather than a general modulus.
///
/// # Example
/// ```
/// use toroidal_sim_core::universe::wrap;
///
/// assert_eq!(wrap(-1, 5), 4);
/// assert_eq!(wrap(2, 5), 2);
/// assert_eq!(wrap(5, 5), 0);
/// ```
pub fn wrap(n: isize, max: usize) -> usize {
    if n < 0 {
        max - 1
    } else if (n as usize) < max {
        n as usize
    } else {
        0
    }
}

/// Where a step landed and what it propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub row: usize,
    pub col: usize,
    pub value: i32,
}

/// Dense `nr × nc` grid of integer labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    nr: usize,
    nc: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Build a grid from a column-major cell vector.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either dimension is zero, `nr * nc` overflows,
    /// or `cells.len() != nr * nc`.
    pub fn new(cells: Vec<i32>, nr: usize, nc: usize) -> Result<Self> {
        let len = checked_len(nr, nc)?;
        if cells.len() != len {
            return Err(SimulationError::invalid_argument(format!(
                "expected {} cells for a {}x{} grid, got {}",
                len,
                nr,
                nc,
                cells.len()
            )));
        }
        Ok(Self { nr, nc, cells })
    }

    pub fn nr(&self) -> usize {
        self.nr
    }

    pub fn nc(&self) -> usize {
        self.nc
    }

    /// Flat column-major view of the cells.
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    /// Value at row `i`, column `j`, or `None` outside the grid.
    pub fn cell(&self, i: usize, j: usize) -> Option<i32> {
        self.index(i, j).map(|idx| self.cells[idx])
    }

    fn index(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.nr && j < self.nc).then(|| i + j * self.nr)
    }

    /// Propagate the value at `(i, j)` to its four toroidal neighbours.
    ///
    /// Neighbours are written up, down, left, right. On a grid with a
    /// dimension of 1 or 2 some neighbours coincide (possibly with `(i, j)`
    /// itself); those cells simply receive `t` more than once.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `(i, j)` is outside the grid; nothing is written.
    pub fn step_at(&mut self, i: usize, j: usize) -> Result<StepOutcome> {
        if self.index(i, j).is_none() {
            return Err(SimulationError::invalid_argument(format!(
                "cell ({}, {}) outside {}x{} grid",
                i, j, self.nr, self.nc
            )));
        }
        Ok(self.propagate(i, j))
    }

    /// One random step: draw the row, then the column, then propagate.
    pub fn step<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> StepOutcome {
        let i = scale_draw(rng.unif_rand(), self.nr);
        let j = scale_draw(rng.unif_rand(), self.nc);
        self.propagate(i, j)
    }

    // (i, j) must be in bounds; wrap keeps every neighbour in bounds too.
    fn propagate(&mut self, i: usize, j: usize) -> StepOutcome {
        let nr = self.nr;
        let t = self.cells[i + j * nr];
        let (ii, jj) = (i as isize, j as isize);

        let targets = [
            (wrap(ii - 1, self.nr), j),
            (wrap(ii + 1, self.nr), j),
            (i, wrap(jj - 1, self.nc)),
            (i, wrap(jj + 1, self.nc)),
        ];
        for (r, c) in targets {
            self.cells[r + c * nr] = t;
        }

        StepOutcome {
            row: i,
            col: j,
            value: t,
        }
    }

    /// Hex SHA-256 over the dimensions and cells.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.nr as u64).to_le_bytes());
        hasher.update((self.nc as u64).to_le_bytes());
        for cell in &self.cells {
            hasher.update(cell.to_le_bytes());
        }
        format!("{:x}", hasher.finalize())
    }

    pub(crate) fn into_cells(self) -> Vec<i32> {
        self.cells
    }
}

/// Truncate `u * max` toward zero, clamped below `max`.
fn scale_draw(u: f64, max: usize) -> usize {
    ((u * max as f64) as usize).min(max - 1)
}

pub(crate) fn checked_len(nr: usize, nc: usize) -> Result<usize> {
    if nr == 0 || nc == 0 {
        return Err(SimulationError::invalid_argument(format!(
            "grid dimensions must be positive, got {}x{}",
            nr, nc
        )));
    }
    nr.checked_mul(nc)
        .filter(|len| *len <= isize::MAX as usize)
        .ok_or_else(|| {
            SimulationError::invalid_argument(format!("grid {}x{} is too large", nr, nc))
        })
}
