//! Equilibration region identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equilibration region number (`EQLNUM` value).
///
/// # Examples
/// ```
/// use equil_core::types::RegionId;
///
/// let region = RegionId::new(3);
/// assert_eq!(region.get(), 3);
/// assert_eq!(region.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(u32);

impl RegionId {
    /// Wraps a raw region number.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw region number.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for RegionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
