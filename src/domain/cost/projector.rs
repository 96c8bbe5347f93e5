//! Yearly running-cost and CO₂ projection per vehicle.

use crate::domain::vehicle::{FuelType, NormalizedVehicle, VehicleRecord};

use super::constants;
use super::UsageAssumptions;

/// Yearly fuel or electricity cost in ₹.
pub fn yearly_energy_cost(vehicle: &NormalizedVehicle, assumptions: &UsageAssumptions) -> f64 {
    if vehicle.fuel_type == FuelType::Electric {
        let efficiency = VehicleRecord::positive(vehicle.efficiency_km_per_kwh)
            .unwrap_or(constants::AVG_EV_EFFICIENCY_KM_PER_KWH);
        let kwh_per_day = assumptions.daily_km / efficiency;
        return kwh_per_day * assumptions.electricity_price_per_kwh * constants::DAYS_PER_YEAR;
    }

    let mileage = VehicleRecord::positive(vehicle.fuel_economy_mpg)
        .map(|mpg| mpg * constants::MPG_TO_KM_PER_L)
        .unwrap_or(assumptions.fallback_mileage_km_per_l);
    let litres_per_day = assumptions.daily_km / mileage;
    let price = match vehicle.fuel_type {
        FuelType::Diesel => assumptions.diesel_price_per_litre,
        _ => assumptions.petrol_price_per_litre,
    };
    litres_per_day * price * constants::DAYS_PER_YEAR
}

/// Yearly CO₂ output in kg. Electric vehicles report zero.
pub fn yearly_co2_kg(vehicle: &NormalizedVehicle, assumptions: &UsageAssumptions) -> f64 {
    if vehicle.fuel_type == FuelType::Electric {
        return 0.0;
    }
    let emissions = VehicleRecord::positive(vehicle.lifecycle_gco2_km)
        .unwrap_or(constants::BASELINE_ICE_GCO2_PER_KM);
    assumptions.daily_km * emissions * constants::DAYS_PER_YEAR / 1000.0
}

/// Yearly CO₂ saved versus the petrol ICE baseline, in kg.
///
/// Never negative: a vehicle dirtier than the baseline saves nothing.
pub fn yearly_co2_savings_kg(vehicle: &NormalizedVehicle, assumptions: &UsageAssumptions) -> f64 {
    let baseline = assumptions.daily_km
        * constants::BASELINE_ICE_GCO2_PER_KM
        * constants::DAYS_PER_YEAR
        / 1000.0;
    (baseline - yearly_co2_kg(vehicle, assumptions)).max(0.0)
}

/// Yearly running cost saved versus the petrol ICE baseline, in ₹.
///
/// Never negative.
pub fn yearly_cost_savings(vehicle: &NormalizedVehicle, assumptions: &UsageAssumptions) -> f64 {
    let baseline = (assumptions.daily_km / constants::AVG_PETROL_MILEAGE_KM_PER_L)
        * assumptions.petrol_price_per_litre
        * constants::DAYS_PER_YEAR;
    (baseline - yearly_energy_cost(vehicle, assumptions)).max(0.0)
}

/// Five-year total ownership cost in ₹.
///
/// An unknown base price counts as zero; unrecorded maintenance falls
/// back to the documented yearly default.
pub fn five_year_ownership_cost(vehicle: &NormalizedVehicle, assumptions: &UsageAssumptions) -> f64 {
    let base_price = vehicle.base_price.unwrap_or(0) as f64;
    let maintenance = vehicle
        .maintenance_yearly_inr
        .unwrap_or(constants::DEFAULT_MAINTENANCE_INR_PER_YEAR) as f64;
    base_price
        + yearly_energy_cost(vehicle, assumptions) * constants::OWNERSHIP_YEARS
        + maintenance * constants::OWNERSHIP_YEARS
}
