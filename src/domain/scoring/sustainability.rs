//! Sustainability score normalizer.
//!
//! Converts lifecycle emissions into the 1-20 score via a linear
//! min-max clamp. The exact thresholds are a compatibility surface:
//! downstream consumers compare scores produced by different releases.

use crate::domain::foundation::SustainabilityScore;
use crate::domain::vehicle::{FuelType, VehicleRecord};

/// Emissions at or below this band score the ceiling (20).
const CEILING_GCO2_KM: f64 = 100.0;

/// Emissions at or above this band score the floor (1).
const FLOOR_GCO2_KM: f64 = 250.0;

/// Width of the sliding band between ceiling and floor.
const BAND_WIDTH: f64 = FLOOR_GCO2_KM - CEILING_GCO2_KM;

/// Kilometres per mile, for EPA g/mile conversion.
const KM_PER_MILE: f64 = 1.60934;

/// Scores a lifecycle emissions value.
///
/// Unreported, non-numeric, and non-positive readings score 1: the
/// engine cannot assume innocence of unreported high emitters.
pub fn score_emissions(gco2_per_km: Option<f64>) -> SustainabilityScore {
    let co2 = match gco2_per_km {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => return SustainabilityScore::MIN,
    };
    if co2 <= CEILING_GCO2_KM {
        return SustainabilityScore::MAX;
    }
    if co2 >= FLOOR_GCO2_KM {
        return SustainabilityScore::MIN;
    }
    let raw = 20.0 - ((co2 - CEILING_GCO2_KM) / BAND_WIDTH) * 19.0;
    SustainabilityScore::new(raw.clamp(1.0, 20.0).round() as u8)
}

/// Resolves a usable gCO₂/km figure from the record's emission fields.
///
/// Priority order: direct lifecycle data always wins; then EPA g/mile
/// converted to g/km; then "CO₂ per 100 km" scaled down. Returns `None`
/// when no numeric emissions are known.
pub fn estimate_emissions(
    lifecycle_gco2_km: Option<f64>,
    epa_g_per_mile: Option<f64>,
    co2_per_100km: Option<f64>,
) -> Option<f64> {
    if let Some(direct) = VehicleRecord::positive(lifecycle_gco2_km) {
        return Some(direct);
    }
    if let Some(per_mile) = VehicleRecord::positive(epa_g_per_mile) {
        return Some(per_mile / KM_PER_MILE);
    }
    VehicleRecord::positive(co2_per_100km).map(|per_100km| per_100km * 10.0)
}

/// Scores a vehicle from whatever emission data it carries.
///
/// When nothing numeric is known, the fuel type decides directly:
/// electric 20, hybrid 15, everything else 7. These category defaults
/// bypass the clamp formula entirely.
pub fn score_vehicle(
    fuel_type: FuelType,
    lifecycle_gco2_km: Option<f64>,
    epa_g_per_mile: Option<f64>,
    co2_per_100km: Option<f64>,
) -> SustainabilityScore {
    match estimate_emissions(lifecycle_gco2_km, epa_g_per_mile, co2_per_100km) {
        Some(gco2_per_km) => score_emissions(Some(gco2_per_km)),
        None => match fuel_type {
            FuelType::Electric => SustainabilityScore::new(20),
            FuelType::Hybrid => SustainabilityScore::new(15),
            _ => SustainabilityScore::new(7),
        },
    }
}
