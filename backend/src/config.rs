//! Simulation configuration
//!
//! A [`SimulationConfig`] describes one run: grid shape, initial cells (or a
//! random fill), seed and number of steps. It is deserialized from JSON by
//! the CLI and validated before anything is allocated or drawn.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::rng::{HostRng, RngManager};
use crate::universe::{checked_len, Universe};

fn default_num_labels() -> u32 {
    2
}

/// Configuration for one universe run.
///
/// # Example
/// ```
/// use toroidal_sim_core::SimulationConfig;
///
/// let config = SimulationConfig::from_json(
///     r#"{"rng_seed": 42, "nr": 4, "nc": 5, "steps": 100}"#,
/// ).unwrap();
/// let run = config.run().unwrap();
/// assert_eq!(run.cells.len(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rng_seed: u64,
    pub nr: usize,
    pub nc: usize,
    /// Column-major initial cells; random labels when absent
    #[serde(default)]
    pub cells: Option<Vec<i32>>,
    /// Labels `0..num_labels` used for the random fill
    #[serde(default = "default_num_labels")]
    pub num_labels: u32,
    #[serde(default)]
    pub steps: u64,
}

/// Result of [`SimulationConfig::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationRun {
    pub nr: usize,
    pub nc: usize,
    pub steps: u64,
    pub cells: Vec<i32>,
    pub fingerprint: String,
    pub final_rng_state: u64,
}

impl SimulationConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on malformed JSON or a failed [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json).map_err(|e| {
            SimulationError::invalid_argument(format!("config parsing failed: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// `InvalidArgument` for a bad shape, a cell count mismatch or
    /// `num_labels == 0`.
    pub fn validate(&self) -> Result<()> {
        let len = checked_len(self.nr, self.nc)?;
        if let Some(cells) = &self.cells {
            if cells.len() != len {
                return Err(SimulationError::invalid_argument(format!(
                    "config has {} cells for a {}x{} grid",
                    cells.len(),
                    self.nr,
                    self.nc
                )));
            }
        }
        if self.num_labels == 0 {
            return Err(SimulationError::invalid_argument(
                "num_labels must be positive",
            ));
        }
        if i32::try_from(self.num_labels).is_err() {
            return Err(SimulationError::invalid_argument(format!(
                "num_labels {} does not fit a cell value",
                self.num_labels
            )));
        }
        Ok(())
    }

    /// Initial cells: the configured ones, or a random fill from `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn initial_cells(&self, rng: &mut RngManager) -> Result<Vec<i32>> {
        self.validate()?;
        match &self.cells {
            Some(cells) => Ok(cells.clone()),
            None => {
                let len = self.nr * self.nc;
                let labels = i64::from(self.num_labels);
                Ok((0..len).map(|_| rng.range(0, labels) as i32).collect())
            }
        }
    }

    /// Build the initial universe, drawing any random fill from `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn build(&self, rng: &mut RngManager) -> Result<Universe> {
        let cells = self.initial_cells(rng)?;
        Universe::create(&cells, self.nr, self.nc)
    }

    /// Seed a host RNG, build the universe, apply `steps` and collect the
    /// final grid. One RNG scope covers the whole run.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn run(&self) -> Result<SimulationRun> {
        let mut host = HostRng::new(self.rng_seed);
        let (cells, fingerprint) = {
            let mut scope = host.acquire();
            let mut universe = self.build(&mut scope)?;
            let steps = i64::try_from(self.steps).map_err(|_| {
                SimulationError::invalid_argument(format!("steps {} too large", self.steps))
            })?;
            universe.update_n(&mut *scope, steps)?;
            (universe.get()?, universe.fingerprint()?)
        };

        Ok(SimulationRun {
            nr: self.nr,
            nc: self.nc,
            steps: self.steps,
            cells,
            fingerprint,
            final_rng_state: host.state(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig {
            rng_seed: 7,
            nr: 3,
            nc: 3,
            cells: None,
            num_labels: 3,
            steps: 10,
        }
    }

    #[test]
    fn test_defaults_from_json() {
        let config = SimulationConfig::from_json(r#"{"rng_seed": 1, "nr": 2, "nc": 2}"#).unwrap();
        assert_eq!(config.num_labels, 2);
        assert_eq!(config.steps, 0);
        assert!(config.cells.is_none());
    }

    #[test]
    fn test_random_fill_respects_labels() {
        let mut rng = RngManager::new(1);
        let cells = config().initial_cells(&mut rng).unwrap();
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|c| (0..3).contains(c)));
    }

    #[test]
    fn test_validate_rejects() {
        let mut bad = config();
        bad.num_labels = 0;
        assert!(bad.validate().is_err());

        let mut bad = config();
        bad.cells = Some(vec![1, 2]);
        assert!(bad.validate().is_err());

        let mut bad = config();
        bad.nr = 0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_invalid_argument() {
        let err = SimulationConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SimulationError::InvalidArgument(_)));
    }
}
