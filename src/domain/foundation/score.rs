//! Sustainability score value object (1-20 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized efficiency rating between 1 and 20 inclusive.
///
/// 20 is the best-in-class band, 1 the highest-impact band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SustainabilityScore(u8);

impl SustainabilityScore {
    /// The floor of the scale.
    pub const MIN: Self = Self(1);

    /// The ceiling of the scale.
    pub const MAX: Self = Self(20);

    /// Creates a new score, clamping into the valid 1-20 range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 20))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SustainabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/20", self.0)
    }
}
