//! Log-uniform distribution.

use super::check_bounds;
use crate::rng::EquilRng;
use crate::types::DistributionError;
use rand_distr::Uniform;

/// Distribution whose logarithm is uniform on `[ln minimum, ln maximum]`.
#[derive(Debug, Clone, Copy)]
pub struct LogUniformDistribution {
    minimum: f64,
    maximum: f64,
    ln_minimum: f64,
    ln_maximum: f64,
    log_sampler: Uniform<f64>,
}

impl PartialEq for LogUniformDistribution {
    fn eq(&self, other: &Self) -> bool {
        self.minimum == other.minimum && self.maximum == other.maximum
    }
}

impl LogUniformDistribution {
    /// Creates the distribution.
    ///
    /// # Errors
    ///
    /// - [`DistributionError::NonFiniteBounds`] for NaN or infinite bounds
    /// - [`DistributionError::InvalidBounds`] when `minimum > maximum`
    /// - [`DistributionError::InvalidLogBounds`] when `minimum <= 0`
    pub fn new(minimum: f64, maximum: f64) -> Result<Self, DistributionError> {
        check_bounds(minimum, maximum)?;
        if minimum <= 0.0 {
            return Err(DistributionError::InvalidLogBounds { minimum });
        }
        let (ln_minimum, ln_maximum) = (minimum.ln(), maximum.ln());
        Ok(Self {
            minimum,
            maximum,
            ln_minimum,
            ln_maximum,
            log_sampler: Uniform::new_inclusive(ln_minimum, ln_maximum),
        })
    }

    /// Draws one value.
    ///
    /// The result is clamped into `[minimum, maximum]` since `exp(ln x)`
    /// may round just outside the bounds.
    #[inline]
    pub fn sample(&self, rng: &mut EquilRng) -> f64 {
        rng.sample(&self.log_sampler)
            .exp()
            .clamp(self.minimum, self.maximum)
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

    /// Expected value, `(max - min) / ln(max / min)`.
    pub fn mean(&self) -> f64 {
        let log_width = self.ln_maximum - self.ln_minimum;
        if log_width == 0.0 {
            return self.minimum;
        }
        (self.maximum - self.minimum) / log_width
    }

    /// Standard deviation.
    ///
    /// `E[X^2] = (max^2 - min^2) / (2 ln(max / min))`.
    pub fn stddev(&self) -> f64 {
        let log_width = self.ln_maximum - self.ln_minimum;
        if log_width == 0.0 {
            return 0.0;
        }
        let second_moment =
            (self.maximum * self.maximum - self.minimum * self.minimum) / (2.0 * log_width);
        let mean = self.mean();
        (second_moment - mean * mean).max(0.0).sqrt()
    }
}
