//! Raw vehicle record as delivered by the external record store.

use serde::{Deserialize, Serialize};

/// A vehicle row as fetched from the record store.
///
/// Numeric fields come from assorted sources and are frequently absent;
/// every consumer must go through the normalization pipeline rather than
/// reading these fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub manufacturer: String,
    pub name: String,
    pub year: i32,
    /// Free-text category string, used to infer the fuel type.
    pub category: String,
    /// Lifecycle emissions in gCO₂/km.
    pub lifecycle_gco2_km: Option<f64>,
    /// EPA-style emissions in g/mile.
    pub epa_g_per_mile: Option<f64>,
    /// Estimated CO₂ per 100 km.
    pub co2_per_100km: Option<f64>,
    pub battery_capacity_kwh: Option<f64>,
    pub range_km: Option<f64>,
    /// Recorded fuel economy in MPG.
    pub fuel_economy_mpg: Option<f64>,
    /// Universal efficiency in km/kWh (electric vehicles).
    pub efficiency_km_per_kwh: Option<f64>,
    pub maintenance_yearly_inr: Option<u64>,
    pub ex_showroom_price_inr: Option<u64>,
    pub image: Option<String>,
}

impl VehicleRecord {
    /// Returns an optional numeric field only when it carries a usable
    /// positive value. Zero and negative readings are treated the same
    /// as absent data throughout the engine.
    pub fn positive(value: Option<f64>) -> Option<f64> {
        value.filter(|v| v.is_finite() && *v > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_passes_usable_values() {
        assert_eq!(VehicleRecord::positive(Some(12.5)), Some(12.5));
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert_eq!(VehicleRecord::positive(Some(0.0)), None);
        assert_eq!(VehicleRecord::positive(Some(-4.0)), None);
    }

    #[test]
    fn positive_rejects_nan_and_none() {
        assert_eq!(VehicleRecord::positive(Some(f64::NAN)), None);
        assert_eq!(VehicleRecord::positive(None), None);
    }
}
