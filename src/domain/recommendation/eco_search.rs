//! Eco-friendly vehicle ranking.

use serde::Serialize;

use crate::domain::foundation::SustainabilityScore;
use crate::domain::vehicle::{BodySegment, FuelType, NormalizedVehicle, VehicleRecord};

/// Ranking emissions assigned to a non-electric vehicle with no usable
/// lifecycle data. Keeps unknown-emission combustion vehicles at the
/// bottom of the ordering instead of tied with clean ones.
const UNKNOWN_EMISSIONS_SENTINEL: f64 = 999.0;

/// Body segment filter; `All` passes every vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFilter {
    All,
    Only(BodySegment),
}

/// Fuel type filter; `All` passes every vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelFilter {
    All,
    Only(FuelType),
}

/// Filter criteria for the eco search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcoCriteria {
    pub budget_min: u64,
    pub budget_max: u64,
    pub body: BodyFilter,
    pub fuel: FuelFilter,
}

impl Default for EcoCriteria {
    fn default() -> Self {
        Self {
            budget_min: 0,
            budget_max: u64::MAX,
            body: BodyFilter::All,
            fuel: FuelFilter::All,
        }
    }
}

/// Effective lifecycle emissions used for ordering.
///
/// Missing data is not neutral: an electric vehicle with no reading
/// ranks as zero-emission, anything else ranks behind every measured
/// vehicle via the sentinel.
pub fn ranking_emissions(vehicle: &NormalizedVehicle) -> f64 {
    match VehicleRecord::positive(vehicle.lifecycle_gco2_km) {
        Some(emissions) => emissions,
        None if vehicle.fuel_type == FuelType::Electric => 0.0,
        None => UNKNOWN_EMISSIONS_SENTINEL,
    }
}

/// The winning vehicle of an eco search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoPick {
    pub name: String,
    pub image: Option<String>,
    pub category: String,
    pub fuel_type: FuelType,
    pub base_price: Option<u64>,
    pub base_price_fmt: String,
    pub sustainability_score: SustainabilityScore,
}

/// A runner-up shown next to the winning vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoAlternative {
    pub name: String,
    pub fuel_type: FuelType,
    pub base_price: Option<u64>,
    pub base_price_fmt: String,
}

/// Eco search result payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EcoSearchOutcome {
    Found {
        best: EcoPick,
        co2_saved_yearly_kg: i64,
        cost_saved_yearly: i64,
        cost_saved_yearly_fmt: String,
        alternatives: Vec<EcoAlternative>,
    },
    /// The filters matched nothing; the catalog itself was non-empty.
    NoMatch { message: String },
}

/// Filters and ranks vehicles by ascending effective emissions.
///
/// A missing base price is treated as zero for the budget window. Ties
/// keep catalog iteration order.
pub fn rank_eco_friendly<'a>(
    vehicles: &'a [NormalizedVehicle],
    criteria: &EcoCriteria,
) -> Vec<&'a NormalizedVehicle> {
    let mut matched: Vec<&NormalizedVehicle> = vehicles
        .iter()
        .filter(|v| {
            let price = v.base_price.unwrap_or(0);
            if price < criteria.budget_min || price > criteria.budget_max {
                return false;
            }
            if let BodyFilter::Only(segment) = criteria.body {
                if v.body_segment != segment {
                    return false;
                }
            }
            if let FuelFilter::Only(fuel) = criteria.fuel {
                if v.fuel_type != fuel {
                    return false;
                }
            }
            true
        })
        .collect();

    matched.sort_by(|a, b| ranking_emissions(a).total_cmp(&ranking_emissions(b)));
    matched
}
