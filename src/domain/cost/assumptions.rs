//! Usage assumptions for cost projection.

use serde::{Deserialize, Serialize};

use super::constants;

/// Per-request usage assumptions for the cost projector.
///
/// Cost profiles are recomputed on every request from these values;
/// nothing derived from them is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageAssumptions {
    pub daily_km: f64,
    pub petrol_price_per_litre: f64,
    pub diesel_price_per_litre: f64,
    pub electricity_price_per_kwh: f64,
    /// Mileage assumed for an ICE vehicle with no recorded fuel economy.
    pub fallback_mileage_km_per_l: f64,
}

impl UsageAssumptions {
    /// Returns the defaults with a different daily commute distance.
    pub fn with_daily_km(daily_km: f64) -> Self {
        Self {
            daily_km,
            ..Self::default()
        }
    }
}

impl Default for UsageAssumptions {
    fn default() -> Self {
        Self {
            daily_km: constants::CALCULATOR_DEFAULT_DAILY_KM,
            petrol_price_per_litre: constants::AVG_PETROL_PRICE_INR_PER_L,
            diesel_price_per_litre: constants::AVG_DIESEL_PRICE_INR_PER_L,
            electricity_price_per_kwh: constants::AVG_ELECTRICITY_COST_INR_PER_KWH,
            fallback_mileage_km_per_l: constants::AVG_PETROL_MILEAGE_KM_PER_L,
        }
    }
}
