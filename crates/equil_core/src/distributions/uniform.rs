//! Linearly uniform distribution.

use super::check_bounds;
use crate::rng::EquilRng;
use crate::types::DistributionError;
use rand_distr::Uniform;

/// Uniform distribution on the closed interval `[minimum, maximum]`.
#[derive(Debug, Clone, Copy)]
pub struct UniformDistribution {
    minimum: f64,
    maximum: f64,
    sampler: Uniform<f64>,
}

impl PartialEq for UniformDistribution {
    fn eq(&self, other: &Self) -> bool {
        self.minimum == other.minimum && self.maximum == other.maximum
    }
}

impl UniformDistribution {
    /// Creates the distribution.
    ///
    /// `minimum == maximum` is allowed and always samples that value.
    ///
    /// # Errors
    ///
    /// - [`DistributionError::NonFiniteBounds`] for NaN or infinite bounds
    /// - [`DistributionError::InvalidBounds`] when `minimum > maximum`
    pub fn new(minimum: f64, maximum: f64) -> Result<Self, DistributionError> {
        check_bounds(minimum, maximum)?;
        Ok(Self {
            minimum,
            maximum,
            sampler: Uniform::new_inclusive(minimum, maximum),
        })
    }

    /// Draws one value.
    #[inline]
    pub fn sample(&self, rng: &mut EquilRng) -> f64 {
        rng.sample(&self.sampler)
    }

    /// Lower bound.
    #[inline]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Upper bound.
    #[inline]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Expected value, `(min + max) / 2`.
    pub fn mean(&self) -> f64 {
        0.5 * (self.minimum + self.maximum)
    }

    /// Standard deviation, `(max - min) / sqrt(12)`.
    pub fn stddev(&self) -> f64 {
        (self.maximum - self.minimum) / 12.0_f64.sqrt()
    }
}
