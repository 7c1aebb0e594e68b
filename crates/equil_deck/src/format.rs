//! Shared layout options for deck text.

/// Layout options applied by both deck writers.
///
/// # Examples
/// ```
/// use equil_deck::DeckFormat;
///
/// let format = DeckFormat::default();
/// assert_eq!(format.float_precision, 6);
/// assert_eq!(format.values_per_line, 1);
/// assert!(format.region_comments);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckFormat {
    /// Decimals used for floating-point values
    pub float_precision: usize,
    /// Grid values written per line in grid includes
    pub values_per_line: usize,
    /// Emit a `--` comment naming each region's values in templated output
    pub region_comments: bool,
}

impl Default for DeckFormat {
    fn default() -> Self {
        Self {
            float_precision: 6,
            values_per_line: 1,
            region_comments: true,
        }
    }
}

impl DeckFormat {
    /// Formats a float with the configured precision.
    #[inline]
    pub fn float(&self, value: f64) -> String {
        format!("{:.*}", self.float_precision, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_uses_precision() {
        let format = DeckFormat {
            float_precision: 2,
            ..DeckFormat::default()
        };
        assert_eq!(format.float(264.12345), "264.12");
        assert_eq!(format.float(-1.0), "-1.00");
    }

    #[test]
    fn test_zero_precision_rounds() {
        let format = DeckFormat {
            float_precision: 0,
            ..DeckFormat::default()
        };
        assert_eq!(format.float(1699.6), "1700");
    }
}
