//! Named templates for solution-section keywords.
//!
//! A template is looked up by name and filled from a context. Rendering is
//! strict: a template that needs a value the context does not hold fails
//! with [`DeckError::UndefinedVariable`] instead of writing a partial record,
//! and a value the template does not read fails with
//! [`DeckError::UnknownVariable`].
//!
//! ## Registered Templates
//!
//! | Name | Context | Output |
//! |------|---------|--------|
//! | `EQUIL` | [`EquilContext`] | One equilibration record per region |

mod equil;

use crate::error::DeckError;
use crate::format::DeckFormat;
use crate::Result;

pub use equil::EQUIL_TEMPLATE;

/// Named values for one region, in insertion order.
///
/// # Examples
/// ```
/// use equil_deck::template::RegionValues;
///
/// let region = RegionValues::new(2, vec![("datum_pressure".to_string(), 260.0)]);
/// assert_eq!(region.get("datum_pressure"), Some(260.0));
/// assert_eq!(region.get("owc_depth"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionValues {
    /// Region number the values belong to
    pub eqlnum: u32,
    /// `(name, value)` pairs
    pub values: Vec<(String, f64)>,
}

impl RegionValues {
    /// Creates a region block.
    pub fn new(eqlnum: u32, values: Vec<(String, f64)>) -> Self {
        Self { eqlnum, values }
    }

    /// Looks up a value by name; the first entry wins on duplicates.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|&(_, value)| value)
    }

    /// Number of named values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the block holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Variables available to the `EQUIL` template.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquilContext {
    /// Number of equilibration regions (records to emit)
    pub nr_eqlnum: usize,
    /// Datum depth shared by every record; `None` renders the default marker
    pub datum_depth: Option<f64>,
    /// Per-region values, in output order
    pub parameters: Vec<RegionValues>,
}

/// Renders the template registered under `name`.
///
/// # Errors
///
/// - [`DeckError::UnknownTemplate`] when nothing is registered under `name`
/// - [`DeckError::UndefinedVariable`] when the context lacks a required value
/// - [`DeckError::UnknownVariable`] when the context holds a name the template does not read
/// - [`DeckError::ConflictingVariables`] when two names fill the same item
pub fn render_template(name: &str, context: &EquilContext, format: &DeckFormat) -> Result<String> {
    match name {
        EQUIL_TEMPLATE => equil::render(context, format),
        other => Err(DeckError::UnknownTemplate(other.to_string())),
    }
}
