//! One row of the equilibration configuration table.

use super::{DistributionError, RegionId};
use crate::distributions::ProbabilityDistribution;
use serde::{Deserialize, Serialize};

/// An uncertain scalar bound to one equilibration region.
///
/// The `loguniform` flag selects the distribution once, in
/// [`distribution`](Self::distribution); the row itself is immutable data.
///
/// # Examples
/// ```
/// use equil_core::types::{ParameterSpec, RegionId};
///
/// let spec = ParameterSpec::uniform("owc_depth", 1700.0, 1750.0, RegionId::new(1));
/// let dist = spec.distribution().unwrap();
/// assert!(!dist.is_log_uniform());
/// assert_eq!(dist.mean(), 1725.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name as referenced by the deck template
    #[serde(alias = "parameter")]
    pub name: String,
    /// Lower bound
    pub minimum: f64,
    /// Upper bound
    pub maximum: f64,
    /// Sample in log space
    #[serde(default)]
    pub loguniform: bool,
    /// Region the parameter applies to
    pub eqlnum: RegionId,
}

impl ParameterSpec {
    /// Creates a row.
    pub fn new(
        name: impl Into<String>,
        minimum: f64,
        maximum: f64,
        loguniform: bool,
        eqlnum: RegionId,
    ) -> Self {
        Self {
            name: name.into(),
            minimum,
            maximum,
            loguniform,
            eqlnum,
        }
    }

    /// Creates a linearly-uniform row.
    pub fn uniform(name: impl Into<String>, minimum: f64, maximum: f64, eqlnum: RegionId) -> Self {
        Self::new(name, minimum, maximum, false, eqlnum)
    }

    /// Creates a log-uniform row.
    pub fn log_uniform(
        name: impl Into<String>,
        minimum: f64,
        maximum: f64,
        eqlnum: RegionId,
    ) -> Self {
        Self::new(name, minimum, maximum, true, eqlnum)
    }

    /// Builds the distribution this row describes.
    ///
    /// # Errors
    ///
    /// Propagates the [`DistributionError`] of the selected variant.
    pub fn distribution(&self) -> Result<ProbabilityDistribution, DistributionError> {
        if self.loguniform {
            ProbabilityDistribution::log_uniform(self.minimum, self.maximum)
        } else {
            ProbabilityDistribution::uniform(self.minimum, self.maximum)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_selects_variant() {
        let linear = ParameterSpec::uniform("a", 1.0, 2.0, RegionId::new(1));
        let log = ParameterSpec::log_uniform("a", 1.0, 2.0, RegionId::new(1));

        assert!(!linear.distribution().unwrap().is_log_uniform());
        assert!(log.distribution().unwrap().is_log_uniform());
    }

    #[test]
    fn test_log_uniform_rejects_zero_minimum() {
        let spec = ParameterSpec::log_uniform("a", 0.0, 2.0, RegionId::new(1));
        assert_eq!(
            spec.distribution().unwrap_err(),
            DistributionError::InvalidLogBounds { minimum: 0.0 }
        );
    }

    #[test]
    fn test_deserialise_table_row() {
        let row: ParameterSpec = toml::from_str(
            r#"
            parameter = "datum_pressure"
            minimum = 250.0
            maximum = 280.0
            loguniform = false
            eqlnum = 2
            "#,
        )
        .unwrap();

        assert_eq!(row.name, "datum_pressure");
        assert_eq!(row.eqlnum, RegionId::new(2));
        assert!(!row.loguniform);
    }

    #[test]
    fn test_loguniform_defaults_to_false() {
        let row: ParameterSpec = toml::from_str(
            r#"
            name = "owc_depth"
            minimum = 1.0
            maximum = 2.0
            eqlnum = 1
            "#,
        )
        .unwrap();
        assert!(!row.loguniform);
    }
}
