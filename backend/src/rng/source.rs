//! Uniform/Cauchy random source abstraction
//!
//! Samplers and universe updates are generic over [`RandomSource`] so tests
//! can script exact draws and hosts can plug in their own stream.

/// A stream of uniform draws in `[0, 1)`, with derived variates.
///
/// Implementors only provide [`unif_rand`](RandomSource::unif_rand); the
/// Cauchy variate is derived from it by inversion.
pub trait RandomSource {
    /// One uniform draw in `[0, 1)`.
    fn unif_rand(&mut self) -> f64;

    /// One Cauchy draw: `location + scale * tan(π u)`.
    ///
    /// Degenerate parameters follow the host's generator and consume no
    /// draw: NaN for a NaN location or a negative or non-finite scale, and
    /// `location` itself for a zero scale or an infinite location.
    fn cauchy(&mut self, location: f64, scale: f64) -> f64 {
        if location.is_nan() || !scale.is_finite() || scale < 0.0 {
            return f64::NAN;
        }
        if scale == 0.0 || !location.is_finite() {
            return location;
        }
        location + scale * (std::f64::consts::PI * self.unif_rand()).tan()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn unif_rand(&mut self) -> f64 {
        (**self).unif_rand()
    }

    fn cauchy(&mut self, location: f64, scale: f64) -> f64 {
        (**self).cauchy(location, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn unif_rand(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_cauchy_median_at_location() {
        let mut src = Fixed(0.0);
        assert_eq!(src.cauchy(3.0, 2.0), 3.0);
    }

    #[test]
    fn test_cauchy_quartile() {
        // tan(π/4) = 1
        let mut src = Fixed(0.25);
        let draw = src.cauchy(1.0, 2.0);
        assert!((draw - 3.0).abs() < 1e-12, "got {}", draw);
    }

    #[test]
    fn test_cauchy_degenerate_parameters() {
        let mut src = Fixed(0.25);
        assert_eq!(src.cauchy(2.0, 0.0), 2.0);
        assert_eq!(src.cauchy(f64::INFINITY, 1.0), f64::INFINITY);
        assert!(src.cauchy(0.0, -1.0).is_nan());
        assert!(src.cauchy(0.0, f64::NAN).is_nan());
        assert!(src.cauchy(0.0, f64::INFINITY).is_nan());
        assert!(src.cauchy(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        let mut src = Fixed(0.25);
        let mut by_ref = &mut src;
        assert_eq!(by_ref.unif_rand(), 0.25);
    }
}
