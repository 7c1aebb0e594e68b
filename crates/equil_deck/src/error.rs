//! Error types for deck formatting.

use thiserror::Error;

/// Failures raised while turning data into deck text.
///
/// # Variants
/// - `InvalidFormat`: The requested layout cannot be produced
/// - `UnknownTemplate`: No template is registered under the given name
/// - `UndefinedVariable`: A template referenced a value the context does not hold
/// - `UnknownVariable`: The context holds a value the template does not read
/// - `ConflictingVariables`: Two values fill the same template item
///
/// # Examples
/// ```
/// use equil_deck::DeckError;
///
/// let err = DeckError::UnknownTemplate("PVTO".to_string());
/// assert_eq!(format!("{}", err), "Unknown template: PVTO");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// The requested layout cannot be produced.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// No template is registered under the given name.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// A template referenced a value the context does not hold.
    #[error("Undefined variable '{name}' in template {template} (region index {region_index})")]
    UndefinedVariable {
        /// Template being rendered
        template: String,
        /// Name of the missing variable
        name: String,
        /// Zero-based index of the region block being rendered
        region_index: usize,
    },

    /// The context holds a value the template does not read.
    #[error("Unknown variable '{name}' in template {template} (region index {region_index})")]
    UnknownVariable {
        /// Template being rendered
        template: String,
        /// Name the template does not recognise
        name: String,
        /// Zero-based index of the region block being rendered
        region_index: usize,
    },

    /// Two values fill the same template item.
    #[error(
        "Conflicting variables '{first}' and '{second}' in template {template} (region index {region_index})"
    )]
    ConflictingVariables {
        /// Template being rendered
        template: String,
        /// First of the conflicting names
        first: String,
        /// Second of the conflicting names
        second: String,
        /// Zero-based index of the region block being rendered
        region_index: usize,
    },
}
