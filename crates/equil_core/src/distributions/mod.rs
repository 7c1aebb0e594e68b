//! Probability distributions for uncertain equilibration parameters.
//!
//! [`ProbabilityDistribution`] is a closed tagged variant: the uniform or
//! log-uniform choice is made once, when a configuration row is turned into
//! a distribution, and never revisited.
//!
//! ## Usage Example
//!
//! ```rust
//! use equil_core::distributions::ProbabilityDistribution;
//! use equil_core::rng::EquilRng;
//!
//! let dist = ProbabilityDistribution::log_uniform(10.0, 1000.0).unwrap();
//! let mut rng = EquilRng::from_seed(1);
//! let value = dist.sample(&mut rng);
//! assert!((10.0..=1000.0).contains(&value));
//! assert_eq!(dist.to_string(), "LOGUNIF 10 1000");
//! ```

mod log_uniform;
mod uniform;

pub use log_uniform::LogUniformDistribution;
pub use uniform::UniformDistribution;

use crate::rng::EquilRng;
use crate::types::DistributionError;
use std::fmt;

/// Checks the bounds shared by every variant.
fn check_bounds(minimum: f64, maximum: f64) -> Result<(), DistributionError> {
    if !minimum.is_finite() || !maximum.is_finite() || !(maximum - minimum).is_finite() {
        return Err(DistributionError::NonFiniteBounds { minimum, maximum });
    }
    if minimum > maximum {
        return Err(DistributionError::InvalidBounds { minimum, maximum });
    }
    Ok(())
}

/// A bounded distribution over one uncertain scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbabilityDistribution {
    /// Linearly uniform on `[minimum, maximum]`
    Uniform(UniformDistribution),
    /// Uniform in log space on `[minimum, maximum]`
    LogUniform(LogUniformDistribution),
}

impl ProbabilityDistribution {
    /// Creates a linearly uniform distribution.
    ///
    /// # Errors
    ///
    /// See [`UniformDistribution::new`].
    pub fn uniform(minimum: f64, maximum: f64) -> Result<Self, DistributionError> {
        UniformDistribution::new(minimum, maximum).map(Self::Uniform)
    }

    /// Creates a log-uniform distribution.
    ///
    /// # Errors
    ///
    /// See [`LogUniformDistribution::new`].
    pub fn log_uniform(minimum: f64, maximum: f64) -> Result<Self, DistributionError> {
        LogUniformDistribution::new(minimum, maximum).map(Self::LogUniform)
    }

    /// Draws one value.
    #[inline]
    pub fn sample(&self, rng: &mut EquilRng) -> f64 {
        match self {
            Self::Uniform(d) => d.sample(rng),
            Self::LogUniform(d) => d.sample(rng),
        }
    }

    /// Lower bound.
    pub fn minimum(&self) -> f64 {
        match self {
            Self::Uniform(d) => d.minimum(),
            Self::LogUniform(d) => d.minimum(),
        }
    }

    /// Upper bound.
    pub fn maximum(&self) -> f64 {
        match self {
            Self::Uniform(d) => d.maximum(),
            Self::LogUniform(d) => d.maximum(),
        }
    }

    /// Expected value.
    pub fn mean(&self) -> f64 {
        match self {
            Self::Uniform(d) => d.mean(),
            Self::LogUniform(d) => d.mean(),
        }
    }

    /// Standard deviation.
    pub fn stddev(&self) -> f64 {
        match self {
            Self::Uniform(d) => d.stddev(),
            Self::LogUniform(d) => d.stddev(),
        }
    }

    /// Whether samples are drawn in log space.
    pub fn is_log_uniform(&self) -> bool {
        matches!(self, Self::LogUniform(_))
    }
}

/// `GEN_KW` descriptor as read by the ensemble tool.
impl fmt::Display for ProbabilityDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = if self.is_log_uniform() {
            "LOGUNIF"
        } else {
            "UNIFORM"
        };
        write!(f, "{} {} {}", keyword, self.minimum(), self.maximum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_nan() {
        let err = ProbabilityDistribution::uniform(f64::NAN, 1.0).unwrap_err();
        assert!(matches!(err, DistributionError::NonFiniteBounds { .. }));
    }

    #[test]
    fn test_rejects_overflowing_width() {
        let err = ProbabilityDistribution::uniform(-f64::MAX, f64::MAX).unwrap_err();
        assert!(matches!(err, DistributionError::NonFiniteBounds { .. }));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = ProbabilityDistribution::uniform(2.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            DistributionError::InvalidBounds {
                minimum: 2.0,
                maximum: 1.0
            }
        );
    }

    #[test]
    fn test_gen_kw_display() {
        let uniform = ProbabilityDistribution::uniform(250.5, 280.0).unwrap();
        assert_eq!(uniform.to_string(), "UNIFORM 250.5 280");
    }

    #[test]
    fn test_accessors_dispatch() {
        let dist = ProbabilityDistribution::log_uniform(1.0, 100.0).unwrap();
        assert_eq!(dist.minimum(), 1.0);
        assert_eq!(dist.maximum(), 100.0);
        assert!(dist.is_log_uniform());
    }
}
