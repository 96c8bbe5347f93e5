//! Fuel type enum and its category-string inference table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived fuel type. Always inferred, never absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Electric,
    Hybrid,
    Diesel,
    Petrol,
}

/// Ordered inference rules: the first category substring that matches
/// decides the fuel type. Earlier rows take priority ("plug-in hybrid
/// electric" must resolve before the hybrid row would).
const FUEL_RULES: &[(&str, FuelType)] = &[
    ("electric", FuelType::Electric),
    ("hybrid", FuelType::Hybrid),
    ("diesel", FuelType::Diesel),
];

impl FuelType {
    /// Infers the fuel type from a free-text category string.
    ///
    /// Unmatched categories default to petrol.
    pub fn infer(category: &str) -> Self {
        let cat = category.to_lowercase();
        FUEL_RULES
            .iter()
            .find(|(needle, _)| cat.contains(needle))
            .map(|(_, fuel)| *fuel)
            .unwrap_or(FuelType::Petrol)
    }

    /// Returns the lowercase label used in payloads and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
            FuelType::Diesel => "diesel",
            FuelType::Petrol => "petrol",
        }
    }

    /// Parses a filter label back into a fuel type.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "electric" => Some(FuelType::Electric),
            "hybrid" => Some(FuelType::Hybrid),
            "diesel" => Some(FuelType::Diesel),
            "petrol" => Some(FuelType::Petrol),
            _ => None,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
