//! Per-region equilibration parameters.
//!
//! [`EquilibrationParameterSet`] holds, for one simulation case, every
//! uncertain equilibration parameter (datum pressure, contact depths, ...)
//! grouped by region. Each render draws one sample per parameter, splits the
//! samples into equal per-region blocks, and produces two includes:
//!
//! - `REGIONS`: the `EQLNUM` array assigning every joined grid cell a region
//! - `SOLUTION`: the `EQUIL` keyword with one record per region
//!
//! Parameter rows must be grouped by region: the sample vector is cut into
//! contiguous blocks, one per region, in order of first appearance.

use crate::config::EquilConfig;
use crate::distributions::ProbabilityDistribution;
use crate::rng::EquilRng;
use crate::tables::{join_regions, TubeCellTable, TubeRegionTable};
use crate::traits::{DeckOutput, DeckParameter, DeckSection, Dims};
use crate::types::{EquilibrationError, ParameterSpec, RegionId};
use crate::Result;
use equil_deck::grdecl::{write_grdecl, GrdeclFormat, GridValue};
use equil_deck::template::{render_template, EquilContext, RegionValues, EQUIL_TEMPLATE};
use equil_deck::DeckFormat;
use tracing::{debug, warn};

/// Dimensioning item for the number of equilibration regions.
pub const NTEQUL: &str = "NTEQUL";

/// Grid keyword of the region-assignment array.
pub const EQLNUM_KEYWORD: &str = "EQLNUM";

/// Deduplicates keeping first-seen order.
fn unique_in_order<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut unique = Vec::new();
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// Uncertain equilibration parameters for one simulation case.
///
/// Distributions are built once at construction and re-sampled on every
/// [`render_output`](DeckParameter::render_output); the random source is
/// owned by the set, so independent sets may render on separate threads.
///
/// # Examples
///
/// ```rust
/// use equil_core::prelude::*;
///
/// let r1 = RegionId::new(1);
/// let specs = vec![
///     ParameterSpec::uniform("datum_pressure", 250.0, 270.0, r1),
///     ParameterSpec::uniform("owc_depth", 1700.0, 1750.0, r1),
/// ];
/// let cells: TubeCellTable = [(0, 0), (0, 1)].into_iter().collect();
/// let regions: TubeRegionTable = [(0, r1)].into_iter().collect();
///
/// let mut set = EquilibrationParameterSet::new(
///     &specs,
///     cells,
///     regions,
///     Some(1650.0),
///     EquilRng::from_seed(42),
/// )
/// .unwrap();
///
/// assert_eq!(set.get_dims()["NTEQUL"], 1);
///
/// let output = set.render_output().unwrap();
/// assert_eq!(output[&DeckSection::Regions], "EQLNUM\n1\n1\n/\n");
/// assert!(output[&DeckSection::Solution].starts_with("EQUIL\n"));
/// ```
#[derive(Debug, Clone)]
pub struct EquilibrationParameterSet {
    random_variables: Vec<ProbabilityDistribution>,
    unique_regions: Vec<RegionId>,
    parameter_names: Vec<String>,
    tube_cells: TubeCellTable,
    tube_regions: TubeRegionTable,
    datum_depth: Option<f64>,
    format: DeckFormat,
    rng: EquilRng,
}

impl EquilibrationParameterSet {
    /// Builds the set from a configuration table.
    ///
    /// One distribution is built per row, in row order. Regions and
    /// parameter names are deduplicated in order of first appearance.
    ///
    /// # Errors
    ///
    /// - [`EquilibrationError::EmptyParameterTable`] when `specs` is empty
    /// - [`EquilibrationError::Distribution`] when a row's bounds are invalid
    /// - [`EquilibrationError::UnevenRegionPartition`] when the row count is
    ///   not a multiple of the region count
    /// - [`EquilibrationError::NonContiguousRegion`] when a row sits in
    ///   another region's block
    pub fn new(
        specs: &[ParameterSpec],
        tube_cells: TubeCellTable,
        tube_regions: TubeRegionTable,
        datum_depth: Option<f64>,
        rng: EquilRng,
    ) -> Result<Self> {
        if specs.is_empty() {
            return Err(EquilibrationError::EmptyParameterTable);
        }

        let random_variables = specs
            .iter()
            .map(|spec| {
                spec.distribution()
                    .map_err(|source| EquilibrationError::Distribution {
                        parameter: spec.name.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let unique_regions = unique_in_order(specs.iter().map(|spec| spec.eqlnum));
        let parameter_names = unique_in_order(specs.iter().map(|spec| spec.name.clone()));

        if specs.len() % unique_regions.len() != 0 {
            return Err(EquilibrationError::UnevenRegionPartition {
                samples: specs.len(),
                regions: unique_regions.len(),
            });
        }

        let per_region = specs.len() / unique_regions.len();
        for (block, region) in specs.chunks_exact(per_region).zip(&unique_regions) {
            if let Some(stray) = block.iter().find(|spec| spec.eqlnum != *region) {
                return Err(EquilibrationError::NonContiguousRegion {
                    parameter: stray.name.clone(),
                    expected: *region,
                    found: stray.eqlnum,
                });
            }
        }

        if parameter_names.len() != per_region {
            warn!(
                names = parameter_names.len(),
                per_region,
                "Parameter name count differs from per-region block size; values will be truncated"
            );
        }

        debug!(
            parameters = specs.len(),
            regions = unique_regions.len(),
            seed = rng.seed(),
            "Equilibration parameter set constructed"
        );

        Ok(Self {
            random_variables,
            unique_regions,
            parameter_names,
            tube_cells,
            tube_regions,
            datum_depth,
            format: DeckFormat::default(),
            rng,
        })
    }

    /// Builds the set with the random source and layout from `config`.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_config(
        specs: &[ParameterSpec],
        tube_cells: TubeCellTable,
        tube_regions: TubeRegionTable,
        datum_depth: Option<f64>,
        config: &EquilConfig,
    ) -> Result<Self> {
        Ok(
            Self::new(specs, tube_cells, tube_regions, datum_depth, config.rng())?
                .with_format(config.deck_format()),
        )
    }

    /// Sets the deck layout.
    pub fn with_format(mut self, format: DeckFormat) -> Self {
        self.format = format;
        self
    }

    /// Copy of this set drawing from child stream `realisation` of its
    /// random source.
    pub fn fork(&self, realisation: u64) -> Self {
        let mut forked = self.clone();
        forked.rng = self.rng.fork(realisation);
        forked
    }

    /// Distinct regions, in order of first appearance.
    pub fn unique_regions(&self) -> &[RegionId] {
        &self.unique_regions
    }

    /// Distinct parameter names, in order of first appearance.
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    /// Datum depth passed through to the `EQUIL` records.
    pub fn datum_depth(&self) -> Option<f64> {
        self.datum_depth
    }

    /// Deck layout in use.
    pub fn format(&self) -> &DeckFormat {
        &self.format
    }

    /// Seed of the owned random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Draws one sample per distribution, in construction order.
    pub fn draw_samples(&mut self) -> Vec<f64> {
        let rng = &mut self.rng;
        self.random_variables
            .iter()
            .map(|distribution| distribution.sample(rng))
            .collect()
    }

    /// Splits `samples` into per-region name → value blocks.
    ///
    /// Block `i` holds samples `[i * n, (i + 1) * n)` where `n` is the
    /// per-region block size, zipped against the parameter names.
    ///
    /// # Errors
    ///
    /// [`EquilibrationError::SampleCountMismatch`] when `samples` does not
    /// hold exactly one value per distribution.
    pub fn region_parameters(&self, samples: &[f64]) -> Result<Vec<RegionValues>> {
        if samples.len() != self.random_variables.len() {
            return Err(EquilibrationError::SampleCountMismatch {
                expected: self.random_variables.len(),
                got: samples.len(),
            });
        }

        let per_region = samples.len() / self.unique_regions.len();
        Ok(self
            .unique_regions
            .iter()
            .zip(samples.chunks_exact(per_region))
            .map(|(region, block)| {
                RegionValues::new(
                    region.get(),
                    self.parameter_names
                        .iter()
                        .cloned()
                        .zip(block.iter().copied())
                        .collect(),
                )
            })
            .collect())
    }
}

impl DeckParameter for EquilibrationParameterSet {
    fn random_variables(&self) -> &[ProbabilityDistribution] {
        &self.random_variables
    }

    fn get_dims(&self) -> Dims {
        Dims::from([(NTEQUL.to_string(), self.unique_regions.len())])
    }

    fn render_output(&mut self) -> Result<DeckOutput> {
        let samples = self.draw_samples();
        self.render_with_samples(&samples)
    }

    fn render_with_samples(&self, samples: &[f64]) -> Result<DeckOutput> {
        let joined = join_regions(&self.tube_cells, &self.tube_regions);
        if joined.is_empty() {
            warn!("Cell/region join produced no rows; EQLNUM array will be empty");
        }

        let parameters = self.region_parameters(samples)?;

        let grid_values: Vec<GridValue> = joined.regions().map(|r| r.get().into()).collect();
        let regions = write_grdecl(
            EQLNUM_KEYWORD,
            &grid_values,
            &GrdeclFormat::from_deck(&self.format, true),
        )?;

        let context = EquilContext {
            nr_eqlnum: self.unique_regions.len(),
            datum_depth: self.datum_depth,
            parameters,
        };
        let solution = render_template(EQUIL_TEMPLATE, &context, &self.format)?;

        debug!(
            samples = samples.len(),
            cells = joined.len(),
            regions = context.nr_eqlnum,
            "Rendered equilibration includes"
        );

        Ok(DeckOutput::from([
            (DeckSection::Regions, regions),
            (DeckSection::Solution, solution),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn r(id: u32) -> RegionId {
        RegionId::new(id)
    }

    fn two_region_specs() -> Vec<ParameterSpec> {
        vec![
            ParameterSpec::uniform("datum_pressure", 250.0, 260.0, r(1)),
            ParameterSpec::uniform("owc_depth", 1700.0, 1710.0, r(1)),
            ParameterSpec::log_uniform("datum_pressure", 270.0, 280.0, r(2)),
            ParameterSpec::uniform("owc_depth", 1720.0, 1730.0, r(2)),
        ]
    }

    fn tables() -> (TubeCellTable, TubeRegionTable) {
        let cells: TubeCellTable = [(0, 0), (1, 1), (0, 2)].into_iter().collect();
        let regions: TubeRegionTable = [(0, r(1)), (1, r(2))].into_iter().collect();
        (cells, regions)
    }

    fn two_region_set(seed: u64) -> EquilibrationParameterSet {
        let (cells, regions) = tables();
        EquilibrationParameterSet::new(
            &two_region_specs(),
            cells,
            regions,
            Some(1650.0),
            EquilRng::from_seed(seed),
        )
        .unwrap()
    }

    #[test]
    fn test_construction_deduplicates() {
        let set = two_region_set(1);
        assert_eq!(set.unique_regions(), &[r(1), r(2)]);
        assert_eq!(set.parameter_names(), &["datum_pressure", "owc_depth"]);
        assert_eq!(set.random_variables().len(), 4);
        assert!(set.random_variables()[2].is_log_uniform());
    }

    #[test]
    fn test_get_dims() {
        let set = two_region_set(1);
        let dims = set.get_dims();
        assert_eq!(dims.len(), 1);
        assert_eq!(dims[NTEQUL], 2);
    }

    #[test]
    fn test_empty_table_rejected() {
        let (cells, regions) = tables();
        let result =
            EquilibrationParameterSet::new(&[], cells, regions, None, EquilRng::from_seed(1));
        assert_eq!(result.unwrap_err(), EquilibrationError::EmptyParameterTable);
    }

    #[test]
    fn test_uneven_partition_rejected() {
        let (cells, regions) = tables();
        let mut specs = two_region_specs();
        specs.pop();
        let result =
            EquilibrationParameterSet::new(&specs, cells, regions, None, EquilRng::from_seed(1));
        assert_eq!(
            result.unwrap_err(),
            EquilibrationError::UnevenRegionPartition {
                samples: 3,
                regions: 2
            }
        );
    }

    #[test]
    fn test_interleaved_regions_rejected() {
        let (cells, regions) = tables();
        let specs = vec![
            ParameterSpec::uniform("datum_pressure", 100.0, 100.0, r(1)),
            ParameterSpec::uniform("datum_pressure", 200.0, 200.0, r(2)),
            ParameterSpec::uniform("owc_depth", 1000.0, 1000.0, r(1)),
            ParameterSpec::uniform("owc_depth", 2000.0, 2000.0, r(2)),
        ];
        let result =
            EquilibrationParameterSet::new(&specs, cells, regions, None, EquilRng::from_seed(1));
        assert_eq!(
            result.unwrap_err(),
            EquilibrationError::NonContiguousRegion {
                parameter: "datum_pressure".to_string(),
                expected: r(1),
                found: r(2),
            }
        );
    }

    #[test]
    fn test_invalid_bounds_name_the_parameter() {
        let (cells, regions) = tables();
        let specs = vec![ParameterSpec::log_uniform("owc_depth", -1.0, 1.0, r(1))];
        let err =
            EquilibrationParameterSet::new(&specs, cells, regions, None, EquilRng::from_seed(1))
                .unwrap_err();
        match err {
            EquilibrationError::Distribution { parameter, .. } => {
                assert_eq!(parameter, "owc_depth")
            }
            other => panic!("Expected distribution error, got {:?}", other),
        }
    }

    #[test]
    fn test_region_parameters_chunks_in_order() {
        let set = two_region_set(1);
        let blocks = set.region_parameters(&[1.0, 2.0, 3.0, 4.0]).unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].eqlnum, 1);
        assert_eq!(blocks[0].get("datum_pressure"), Some(1.0));
        assert_eq!(blocks[0].get("owc_depth"), Some(2.0));
        assert_eq!(blocks[1].eqlnum, 2);
        assert_eq!(blocks[1].get("datum_pressure"), Some(3.0));
        assert_eq!(blocks[1].get("owc_depth"), Some(4.0));
    }

    #[test]
    fn test_region_parameters_rejects_wrong_length() {
        let set = two_region_set(1);
        assert_eq!(
            set.region_parameters(&[1.0, 2.0]).unwrap_err(),
            EquilibrationError::SampleCountMismatch {
                expected: 4,
                got: 2
            }
        );
    }

    #[test]
    fn test_render_with_samples_exact_text() {
        let set = two_region_set(1).with_format(DeckFormat {
            float_precision: 1,
            values_per_line: 1,
            region_comments: false,
        });
        let output = set.render_with_samples(&[255.0, 1705.0, 275.0, 1725.0]).unwrap();

        assert_eq!(output.len(), 2);
        assert_eq!(output[&DeckSection::Regions], "EQLNUM\n1\n2\n1\n/\n");

        let solution = &output[&DeckSection::Solution];
        assert!(solution.contains("1650.0 255.0 1705.0 0 1* 0 1* 1* 1* /\n"));
        assert!(solution.contains("1650.0 275.0 1725.0 0 1* 0 1* 1* 1* /\n"));
    }

    #[test]
    fn test_render_output_draws_fresh_samples() {
        let mut set = two_region_set(9);
        let first = set.render_output().unwrap();
        let second = set.render_output().unwrap();

        assert_eq!(first[&DeckSection::Regions], second[&DeckSection::Regions]);
        assert_ne!(first[&DeckSection::Solution], second[&DeckSection::Solution]);
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut a = two_region_set(77);
        let mut b = two_region_set(77);
        assert_eq!(a.render_output().unwrap(), b.render_output().unwrap());
    }

    #[test]
    fn test_fork_changes_stream_only() {
        let set = two_region_set(3);
        let forked = set.fork(1);

        assert_ne!(forked.seed(), set.seed());
        assert_eq!(forked.unique_regions(), set.unique_regions());
        assert_eq!(forked.get_dims(), set.get_dims());
    }

    #[test]
    fn test_template_failure_propagates() {
        let (cells, regions) = tables();
        let specs = vec![ParameterSpec::uniform("owc_depth", 1.0, 2.0, r(1))];
        let mut set =
            EquilibrationParameterSet::new(&specs, cells, regions, None, EquilRng::from_seed(1))
                .unwrap();

        let err = set.render_output().unwrap_err();
        assert!(matches!(err, EquilibrationError::Deck(_)));
    }

    #[test]
    fn test_mean_values() {
        let set = two_region_set(1);
        let means = set.mean_values();
        assert_eq!(means.len(), 4);
        assert_relative_eq!(means[0], 255.0);
        assert_relative_eq!(means[3], 1725.0);
    }

    #[test]
    fn test_from_config_applies_seed_and_format() {
        let (cells, regions) = tables();
        let config = EquilConfig {
            seed: Some(123),
            float_precision: 2,
            region_comments: false,
            ..EquilConfig::default()
        };
        let set = EquilibrationParameterSet::from_config(
            &two_region_specs(),
            cells,
            regions,
            None,
            &config,
        )
        .unwrap();

        assert_eq!(set.seed(), 123);
        assert_eq!(set.format().float_precision, 2);
        assert!(!set.format().region_comments);
    }
}
