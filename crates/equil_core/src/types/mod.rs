//! Configuration-table and error types.
//!
//! This module provides:
//! - `region`: The [`RegionId`] newtype for equilibration region numbers
//! - `parameter_spec`: One row of the equilibration configuration table
//! - `error`: Structured error types for distributions, parameter sets and configuration

pub mod error;
pub mod parameter_spec;
pub mod region;

pub use error::{ConfigError, DistributionError, EquilibrationError};
pub use parameter_spec::ParameterSpec;
pub use region::RegionId;
