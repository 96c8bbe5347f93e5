//! Five-year ownership cost projection.
//!
//! Compares cumulative ownership cost of a specific ICE purchase
//! against a specific EV purchase under the savings-chart surface's
//! own stated assumptions. Unlike the per-vehicle savings helpers,
//! this projection may report a negative saving: a pricey EV against a
//! frugal ICE is a real outcome the chart shows.

use serde::Serialize;

use super::constants;

/// Cumulative cost of both purchases at the end of one ownership year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearPoint {
    pub year: u8,
    pub ice_total: i64,
    pub ev_total: i64,
}

/// Five-year ownership comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipProjection {
    pub ice_annual_running: i64,
    pub ev_annual_running: i64,
    pub annual_saving: i64,
    pub five_year_saving: i64,
    /// Cumulative purchase-plus-running totals for years 1..=5.
    pub timeline: Vec<YearPoint>,
    pub ev_cheaper_after_five_years: bool,
}

/// Projects five years of ownership for an ICE/EV purchase pair.
pub fn project_ownership(ice_price: u64, ev_price: u64, annual_km: f64) -> OwnershipProjection {
    let ice_fuel = annual_km / constants::PROJECTION_ICE_MILEAGE_KM_PER_L
        * constants::PROJECTION_PETROL_PRICE_INR_PER_L;
    let ice_annual = ice_fuel
        + constants::PROJECTION_ICE_MAINTENANCE_INR
        + constants::PROJECTION_ICE_INSURANCE_INR;

    let ev_charging = annual_km / constants::PROJECTION_EV_EFFICIENCY_KM_PER_KWH
        * constants::PROJECTION_ELECTRICITY_INR_PER_KWH;
    let ev_annual = ev_charging
        + constants::PROJECTION_EV_MAINTENANCE_INR
        + constants::PROJECTION_EV_INSURANCE_INR;

    let timeline = (1..=5)
        .map(|year| YearPoint {
            year,
            ice_total: (ice_price as f64 + ice_annual * year as f64).round() as i64,
            ev_total: (ev_price as f64 + ev_annual * year as f64).round() as i64,
        })
        .collect::<Vec<_>>();

    let last = timeline
        .last()
        .copied()
        .unwrap_or(YearPoint { year: 5, ice_total: 0, ev_total: 0 });

    OwnershipProjection {
        ice_annual_running: ice_annual.round() as i64,
        ev_annual_running: ev_annual.round() as i64,
        annual_saving: (ice_annual - ev_annual).round() as i64,
        five_year_saving: ((ice_annual - ev_annual) * constants::OWNERSHIP_YEARS).round() as i64,
        ev_cheaper_after_five_years: last.ev_total <= last.ice_total,
        timeline,
    }
}
