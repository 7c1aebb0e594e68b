//! The [`DeckParameter`] seam.

use crate::distributions::ProbabilityDistribution;
use crate::Result;
use std::collections::BTreeMap;
use std::fmt;

/// Table dimensions, keyed by the simulator's dimensioning item name.
pub type Dims = BTreeMap<String, usize>;

/// Rendered deck text, keyed by the section it is included into.
pub type DeckOutput = BTreeMap<DeckSection, String>;

/// Destination section of a rendered include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeckSection {
    /// GRID/REGIONS section (cell property arrays)
    Regions,
    /// SOLUTION section (initialisation keywords)
    Solution,
}

impl DeckSection {
    /// Deck section keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeckSection::Regions => "REGIONS",
            DeckSection::Solution => "SOLUTION",
        }
    }
}

impl fmt::Display for DeckSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A family of uncertain parameters that renders into deck includes.
///
/// Implementors hold one distribution per uncertain scalar, fixed at
/// construction. Rendering either draws a fresh sample set
/// ([`render_output`](Self::render_output)) or uses one supplied by an
/// external ensemble tool ([`render_with_samples`](Self::render_with_samples)).
pub trait DeckParameter {
    /// Distributions in sampling order.
    fn random_variables(&self) -> &[ProbabilityDistribution];

    /// Table dimensions the simulator must allocate for this family.
    fn get_dims(&self) -> Dims;

    /// Draws a fresh sample per distribution and renders the includes.
    fn render_output(&mut self) -> Result<DeckOutput>;

    /// Renders the includes from externally drawn samples.
    fn render_with_samples(&self, samples: &[f64]) -> Result<DeckOutput>;

    /// Expected value of every distribution, in sampling order.
    fn mean_values(&self) -> Vec<f64> {
        self.random_variables()
            .iter()
            .map(ProbabilityDistribution::mean)
            .collect()
    }
}
