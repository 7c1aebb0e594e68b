//! Cell, flow-tube and region lookup tables.
//!
//! The region-assignment block is built from two externally supplied
//! tables joined on tube index:
//!
//! - [`TubeCellTable`]: which grid cells each flow tube covers
//! - [`TubeRegionTable`]: which equilibration region each tube belongs to
//!
//! [`join_regions`] is an inner join: output rows follow the tube-cell
//! table's order, tubes without a region are dropped, and a tube listed
//! under several regions yields one row per listing.

use crate::types::RegionId;
use std::collections::HashMap;

/// A grid cell covered by a flow tube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TubeCell {
    /// Flow-tube index
    pub tube: usize,
    /// Grid cell index
    pub cell: usize,
}

/// Ordered tube → cell rows. A tube may cover several cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TubeCellTable {
    rows: Vec<TubeCell>,
}

impl TubeCellTable {
    /// Creates the table from rows.
    pub fn new(rows: Vec<TubeCell>) -> Self {
        Self { rows }
    }

    /// Rows in input order.
    pub fn rows(&self) -> &[TubeCell] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds the table from `(tube, cell)` pairs.
impl FromIterator<(usize, usize)> for TubeCellTable {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(tube, cell)| TubeCell { tube, cell })
                .collect(),
        )
    }
}

/// Ordered tube → region rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TubeRegionTable {
    rows: Vec<(usize, RegionId)>,
}

impl TubeRegionTable {
    /// Creates the table from `(tube, region)` rows.
    pub fn new(rows: Vec<(usize, RegionId)>) -> Self {
        Self { rows }
    }

    /// Rows in input order.
    pub fn rows(&self) -> &[(usize, RegionId)] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<(usize, RegionId)> for TubeRegionTable {
    fn from_iter<I: IntoIterator<Item = (usize, RegionId)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A grid cell with its resolved region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRegion {
    /// Flow-tube index the row was joined on
    pub tube: usize,
    /// Grid cell index
    pub cell: usize,
    /// Equilibration region
    pub region: RegionId,
}

/// Result of [`join_regions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellRegionTable {
    rows: Vec<CellRegion>,
}

impl CellRegionTable {
    /// Joined rows.
    pub fn rows(&self) -> &[CellRegion] {
        &self.rows
    }

    /// The region column, in row order.
    pub fn regions(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.rows.iter().map(|row| row.region)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the join produced no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Inner-joins tube cells with tube regions on tube index.
///
/// # Examples
///
/// ```
/// use equil_core::tables::{join_regions, TubeCellTable, TubeRegionTable};
/// use equil_core::types::RegionId;
///
/// let cells: TubeCellTable = [(0, 10), (1, 11), (0, 12), (5, 13)].into_iter().collect();
/// let regions: TubeRegionTable =
///     [(0, RegionId::new(1)), (1, RegionId::new(2))].into_iter().collect();
///
/// let joined = join_regions(&cells, &regions);
/// let column: Vec<u32> = joined.regions().map(RegionId::get).collect();
/// assert_eq!(column, vec![1, 2, 1]);
/// ```
pub fn join_regions(cells: &TubeCellTable, regions: &TubeRegionTable) -> CellRegionTable {
    let mut by_tube: HashMap<usize, Vec<RegionId>> = HashMap::with_capacity(regions.len());
    for &(tube, region) in regions.rows() {
        by_tube.entry(tube).or_default().push(region);
    }

    let rows = cells
        .rows()
        .iter()
        .flat_map(|tc| {
            by_tube
                .get(&tc.tube)
                .into_iter()
                .flatten()
                .map(move |&region| CellRegion {
                    tube: tc.tube,
                    cell: tc.cell,
                    region,
                })
        })
        .collect();

    CellRegionTable { rows }
}
