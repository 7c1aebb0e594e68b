//! # equil_deck: Deck Formatting Boundary (Layer 1)
//!
//! ## Layer 1 Role
//!
//! equil_deck turns plain data into simulator input-deck text. It owns two
//! formatting collaborators and nothing else:
//! - Grid-include writer for integer or float keyword arrays (`grdecl`)
//! - Named template renderer for the solution section (`template`)
//!
//! Both are pure functions from data to text with a fixed, versioned output
//! grammar ([`GRAMMAR_VERSION`]). No randomness and no knowledge of
//! probability distributions live here; sampling is Layer 2 (`equil_core`).
//!
//! ## Usage Examples
//!
//! ```rust
//! use equil_deck::grdecl::{write_grdecl, GrdeclFormat, GridValue};
//! use equil_deck::template::{render_template, EquilContext, RegionValues};
//! use equil_deck::DeckFormat;
//!
//! let regions = [GridValue::Int(1), GridValue::Int(1), GridValue::Int(2)];
//! let grid = write_grdecl("EQLNUM", &regions, &GrdeclFormat::integer()).unwrap();
//! assert_eq!(grid, "EQLNUM\n1\n1\n2\n/\n");
//!
//! let context = EquilContext {
//!     nr_eqlnum: 1,
//!     datum_depth: Some(1500.0),
//!     parameters: vec![RegionValues::new(
//!         1,
//!         vec![
//!             ("datum_pressure".to_string(), 250.0),
//!             ("owc_depth".to_string(), 1700.0),
//!         ],
//!     )],
//! };
//! let format = DeckFormat { region_comments: false, float_precision: 1, ..DeckFormat::default() };
//! let equil = render_template("EQUIL", &context, &format).unwrap();
//! assert!(equil.contains("1500.0 250.0 1700.0 0 1* 0 1* 1* 1* /"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`DeckFormat`] and the template context types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod format;
pub mod grdecl;
pub mod template;

pub use error::DeckError;
pub use format::DeckFormat;

/// Version of the output grammar produced by this crate.
///
/// Bumped whenever the text layout of either writer changes, so downstream
/// golden files can be regenerated deliberately.
pub const GRAMMAR_VERSION: u32 = 1;

/// Result alias for deck formatting operations.
pub type Result<T> = std::result::Result<T, DeckError>;
