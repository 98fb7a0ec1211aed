//! Random samplers exposed to the host
//!
//! Stateless functions over an injected [`RandomSource`]: Cauchy draws and a
//! rejection-sampling estimate of π. Arguments are validated before the first
//! draw, so a rejected call never advances the stream.
//!
//! # Example
//!
//! ```
//! use toroidal_sim_core::{sampling, HostRng};
//!
//! let mut host = HostRng::new(2024);
//! let estimate = sampling::estimate_pi(&mut host.acquire(), 10_000).unwrap();
//! assert!((0.0..=4.0).contains(&estimate));
//! ```

use crate::error::{Result, SimulationError};
use crate::rng::RandomSource;

/// One draw from Cauchy(`location`, `scale`).
///
/// Never fails: degenerate parameters yield `location` or NaN without
/// drawing, as described on [`RandomSource::cauchy`].
pub fn sample_cauchy<R: RandomSource + ?Sized>(rng: &mut R, location: f64, scale: f64) -> f64 {
    rng.cauchy(location, scale)
}

/// Exactly `n` standard Cauchy draws (location 0, scale 1).
///
/// `n == 0` yields an empty vector.
///
/// # Errors
///
/// `InvalidArgument` if `n` is negative.
pub fn sample_cauchy_batch<R: RandomSource + ?Sized>(rng: &mut R, n: i64) -> Result<Vec<f64>> {
    let n = non_negative(n, "n")?;
    Ok((0..n).map(|_| rng.cauchy(0.0, 1.0)).collect())
}

/// Rejection-sampling estimate of π from `n` points in the unit square.
///
/// Draws `x` then `y` for each point, counts points with `x² + y² ≤ 1` and
/// returns `4 * count / n`.
///
/// # Errors
///
/// `InvalidArgument` if `n` is zero or negative.
pub fn estimate_pi<R: RandomSource + ?Sized>(rng: &mut R, n: i64) -> Result<f64> {
    if n <= 0 {
        return Err(SimulationError::invalid_argument(format!(
            "n must be positive, got {}",
            n
        )));
    }

    let mut inside: u64 = 0;
    for _ in 0..n {
        let x = rng.unif_rand();
        let y = rng.unif_rand();
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }

    Ok(4.0 * inside as f64 / n as f64)
}

/// Coerce a host numeric value to an integer count.
///
/// Follows the host's double-to-integer coercion: truncate toward zero, and
/// treat NaN, infinities and anything outside the 32-bit integer range as
/// missing. A missing count is an error, never zero.
///
/// # Example
/// ```
/// use toroidal_sim_core::sampling::count_from_host;
///
/// assert_eq!(count_from_host(3.9).unwrap(), 3);
/// assert!(count_from_host(f64::NAN).is_err());
/// ```
///
/// # Errors
///
/// `InvalidArgument` if the value has no integer representation.
pub fn count_from_host(value: f64) -> Result<i64> {
    let upper = i32::MAX as f64 + 1.0;
    let lower = i32::MIN as f64;
    if value.is_nan() || value >= upper || value <= lower {
        return Err(SimulationError::invalid_argument(format!(
            "expected non-NA count (possibly caused by coercion of {})",
            value
        )));
    }
    Ok(value.trunc() as i64)
}

/// Check a host integer count against the host's integer range.
///
/// The host stores integers in 32 bits with `i32::MIN` as its missing marker,
/// so only `i32::MIN + 1 ..= i32::MAX` is a usable count.
///
/// # Errors
///
/// `InvalidArgument` if the value is out of range or the missing marker.
pub fn count_from_host_int(value: i64) -> Result<i64> {
    if value <= i32::MIN as i64 || value > i32::MAX as i64 {
        return Err(SimulationError::invalid_argument(format!(
            "expected non-NA count, got integer {}",
            value
        )));
    }
    Ok(value)
}

/// Coerce a host vector argument that must hold exactly one count.
///
/// # Errors
///
/// `InvalidArgument` if `values` is not a scalar or its element is NA.
pub fn scalar_count(values: &[f64]) -> Result<i64> {
    match values {
        [value] => count_from_host(*value),
        _ => Err(SimulationError::invalid_argument(format!(
            "expected a scalar count, got {} values",
            values.len()
        ))),
    }
}

pub(crate) fn non_negative(n: i64, name: &str) -> Result<u64> {
    u64::try_from(n).map_err(|_| {
        SimulationError::invalid_argument(format!("{} must be non-negative, got {}", name, n))
    })
}
