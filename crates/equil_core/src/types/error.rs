//! Error types for structured error handling.
//!
//! This module provides:
//! - `DistributionError`: Errors from distribution construction
//! - `EquilibrationError`: Errors from building or rendering a parameter set
//! - `ConfigError`: Errors from loading and validating render configuration

use super::RegionId;
use equil_deck::DeckError;
use thiserror::Error;

/// Domain failures raised by the distribution primitives.
///
/// # Examples
/// ```
/// use equil_core::types::DistributionError;
///
/// let err = DistributionError::InvalidBounds { minimum: 2.0, maximum: 1.0 };
/// assert!(format!("{}", err).contains("minimum (2) must not exceed maximum (1)"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A bound is NaN or infinite.
    #[error("Non-finite bounds: [{minimum}, {maximum}]")]
    NonFiniteBounds {
        /// Lower bound
        minimum: f64,
        /// Upper bound
        maximum: f64,
    },

    /// The lower bound exceeds the upper bound.
    #[error("Invalid bounds: minimum ({minimum}) must not exceed maximum ({maximum})")]
    InvalidBounds {
        /// Lower bound
        minimum: f64,
        /// Upper bound
        maximum: f64,
    },

    /// A log-uniform distribution was given a non-positive lower bound.
    #[error("Invalid log-uniform bounds: minimum ({minimum}) must be positive")]
    InvalidLogBounds {
        /// Lower bound
        minimum: f64,
    },
}

/// Errors raised while building or rendering an equilibration parameter set.
///
/// # Variants
/// - `EmptyParameterTable`: No parameter rows were supplied
/// - `UnevenRegionPartition`: Rows cannot be split evenly across regions
/// - `NonContiguousRegion`: A region's rows are not adjacent
/// - `SampleCountMismatch`: Supplied samples do not match the distributions
/// - `Distribution`: A row's bounds were rejected by its distribution
/// - `Deck`: Deck formatting failed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquilibrationError {
    /// No parameter rows were supplied, so there is no region to render.
    #[error("Parameter table is empty: at least one equilibration parameter is required")]
    EmptyParameterTable,

    /// The number of rows is not a multiple of the number of regions.
    #[error(
        "Uneven region partition: {samples} parameters cannot be split evenly across {regions} regions"
    )]
    UnevenRegionPartition {
        /// Number of parameter rows (one sample each)
        samples: usize,
        /// Number of distinct regions
        regions: usize,
    },

    /// A row falls inside the block of another region, so its sample would
    /// be rendered under the wrong region.
    #[error(
        "Non-contiguous region: parameter '{parameter}' belongs to region {found} but sits in the block of region {expected}"
    )]
    NonContiguousRegion {
        /// Name of the first misplaced row
        parameter: String,
        /// Region owning the block
        expected: RegionId,
        /// Region the row declares
        found: RegionId,
    },

    /// Externally supplied samples do not match the number of distributions.
    #[error("Sample count mismatch: expected {expected} samples, got {got}")]
    SampleCountMismatch {
        /// Number of distributions held by the set
        expected: usize,
        /// Number of samples supplied
        got: usize,
    },

    /// A row's bounds were rejected by its distribution.
    #[error("Parameter '{parameter}': {source}")]
    Distribution {
        /// Name of the offending parameter
        parameter: String,
        /// Underlying distribution failure
        #[source]
        source: DistributionError,
    },

    /// Deck formatting failed.
    #[error("Deck rendering failed: {0}")]
    Deck(#[from] DeckError),
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration text could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// One or more settings are out of range.
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
