//! Grid-include writer.
//!
//! Produces the fixed-format keyword arrays a simulator reads from an
//! `INCLUDE`d file in its GRID or REGIONS section:
//!
//! ```text
//! EQLNUM
//! 1
//! 1
//! 2
//! /
//! ```
//!
//! The keyword sits on its own line, values follow in input order
//! (`values_per_line` per line, single-space separated), and a line holding
//! `/` terminates the array.

use crate::error::DeckError;
use crate::format::DeckFormat;
use crate::Result;
use std::fmt::Write;

/// A single grid cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridValue {
    /// Integer-valued cell property (region numbers, flags)
    Int(i64),
    /// Float-valued cell property
    Float(f64),
}

impl From<i64> for GridValue {
    fn from(value: i64) -> Self {
        GridValue::Int(value)
    }
}

impl From<u32> for GridValue {
    fn from(value: u32) -> Self {
        GridValue::Int(i64::from(value))
    }
}

impl From<f64> for GridValue {
    fn from(value: f64) -> Self {
        GridValue::Float(value)
    }
}

/// Layout of a single grid-include array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrdeclFormat {
    /// Write every value as an integer
    pub int_type: bool,
    /// Values per output line
    pub values_per_line: usize,
    /// Decimals for float output (ignored when `int_type` is set)
    pub float_precision: usize,
}

impl GrdeclFormat {
    /// Integer layout, one value per line.
    pub fn integer() -> Self {
        Self {
            int_type: true,
            values_per_line: 1,
            float_precision: 0,
        }
    }

    /// Float layout with the given precision, one value per line.
    pub fn float(float_precision: usize) -> Self {
        Self {
            int_type: false,
            values_per_line: 1,
            float_precision,
        }
    }

    /// Derives the array layout from the shared deck layout.
    pub fn from_deck(format: &DeckFormat, int_type: bool) -> Self {
        Self {
            int_type,
            values_per_line: format.values_per_line,
            float_precision: format.float_precision,
        }
    }

    fn value(&self, value: GridValue) -> String {
        match (value, self.int_type) {
            (GridValue::Int(v), true) => v.to_string(),
            (GridValue::Float(v), true) => format!("{:.0}", v),
            (GridValue::Int(v), false) => format!("{:.*}", self.float_precision, v as f64),
            (GridValue::Float(v), false) => format!("{:.*}", self.float_precision, v),
        }
    }
}

/// Writes `values` as a grid-include array under `keyword`.
///
/// # Errors
///
/// Returns [`DeckError::InvalidFormat`] when the keyword is empty or contains
/// whitespace, or when `values_per_line` is zero. An empty value slice is not
/// an error: the keyword is followed directly by the terminator.
///
/// # Examples
///
/// ```
/// use equil_deck::grdecl::{write_grdecl, GrdeclFormat, GridValue};
///
/// let values = [GridValue::Float(0.25), GridValue::Float(0.5)];
/// let text = write_grdecl("PORO", &values, &GrdeclFormat::float(2)).unwrap();
/// assert_eq!(text, "PORO\n0.25\n0.50\n/\n");
/// ```
pub fn write_grdecl(keyword: &str, values: &[GridValue], format: &GrdeclFormat) -> Result<String> {
    if keyword.is_empty() || keyword.chars().any(char::is_whitespace) {
        return Err(DeckError::InvalidFormat(format!(
            "grid keyword '{}' must be a single non-empty token",
            keyword
        )));
    }
    if format.values_per_line == 0 {
        return Err(DeckError::InvalidFormat(
            "values_per_line must be positive".to_string(),
        ));
    }

    let mut out = String::with_capacity(keyword.len() + values.len() * 4 + 4);
    out.push_str(keyword);
    out.push('\n');

    for line in values.chunks(format.values_per_line) {
        let rendered: Vec<String> = line.iter().map(|&v| format.value(v)).collect();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", rendered.join(" "));
    }

    out.push_str("/\n");
    Ok(out)
}
