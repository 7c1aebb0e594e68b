//! # equil_core: Equilibration Parameter Sampling (Layer 2)
//!
//! ## Layer 2 Role
//!
//! equil_core turns a table of per-region uncertain initialisation
//! parameters into sampled values and simulator deck includes:
//! - Seedable, owned random sources (`rng`)
//! - Uniform and log-uniform distributions (`distributions`)
//! - Configuration-table rows and error types (`types`)
//! - Cell/tube/region lookup tables and their join (`tables`)
//! - The [`EquilibrationParameterSet`] and its `EQLNUM`/`EQUIL` rendering (`equilibration`)
//! - The [`DeckParameter`](traits::DeckParameter) seam (`traits`)
//! - Render configuration (`config`)
//!
//! Text layout is delegated to Layer 1 (`equil_deck`).
//!
//! ## Usage Examples
//!
//! ```rust
//! use equil_core::prelude::*;
//!
//! let specs = vec![
//!     ParameterSpec::uniform("datum_pressure", 250.0, 270.0, RegionId::new(1)),
//!     ParameterSpec::uniform("owc_depth", 1700.0, 1750.0, RegionId::new(1)),
//!     ParameterSpec::uniform("datum_pressure", 255.0, 275.0, RegionId::new(2)),
//!     ParameterSpec::uniform("owc_depth", 1710.0, 1760.0, RegionId::new(2)),
//! ];
//! let cells: TubeCellTable = [(0, 0), (1, 1), (1, 2)].into_iter().collect();
//! let regions: TubeRegionTable =
//!     [(0, RegionId::new(1)), (1, RegionId::new(2))].into_iter().collect();
//!
//! let config = EquilConfig::from_toml_str("seed = 7").unwrap();
//! let mut set =
//!     EquilibrationParameterSet::from_config(&specs, cells, regions, Some(1600.0), &config)
//!         .unwrap();
//!
//! let output = set.render_output().unwrap();
//! assert_eq!(output[&DeckSection::Regions], "EQLNUM\n1\n2\n2\n/\n");
//! assert_eq!(output[&DeckSection::Solution].matches(" /\n").count(), 2);
//! ```
//!
//! ## Concurrency
//!
//! A set owns its random source and renders through `&mut self`, so one
//! render is in flight per instance. For concurrent realisations, give each
//! thread its own set via [`EquilibrationParameterSet::fork`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod distributions;
pub mod equilibration;
pub mod rng;
pub mod tables;
pub mod traits;
pub mod types;

pub use config::EquilConfig;
pub use equilibration::{EquilibrationParameterSet, EQLNUM_KEYWORD, NTEQUL};
pub use types::EquilibrationError;

/// Result alias for parameter-set operations.
pub type Result<T> = std::result::Result<T, EquilibrationError>;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use equil_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::EquilConfig;
    pub use crate::distributions::{
        LogUniformDistribution, ProbabilityDistribution, UniformDistribution,
    };
    pub use crate::equilibration::EquilibrationParameterSet;
    pub use crate::rng::EquilRng;
    pub use crate::tables::{join_regions, CellRegionTable, TubeCellTable, TubeRegionTable};
    pub use crate::traits::{DeckOutput, DeckParameter, DeckSection, Dims};
    pub use crate::types::{
        ConfigError, DistributionError, EquilibrationError, ParameterSpec, RegionId,
    };
    pub use equil_deck::DeckFormat;
}
