//! EV-under-budget shortlisting.

use serde::Serialize;

use crate::domain::vehicle::{FuelType, NormalizedVehicle};

/// Number of EVs returned by the shortlist.
pub const SHORTLIST_SIZE: usize = 4;

/// Commute usage pattern driving the shortlist ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsagePattern {
    #[default]
    City,
    Highway,
}

impl UsagePattern {
    /// Parses a usage label. Only the literal "highway" (any case)
    /// selects range-first ordering; every other value behaves as city.
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case("highway") {
            UsagePattern::Highway
        } else {
            UsagePattern::City
        }
    }
}

/// One shortlisted EV.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvPick {
    pub name: String,
    pub image: Option<String>,
    pub base_price: Option<u64>,
    pub base_price_fmt: String,
    pub range_km: Option<f64>,
    pub battery_capacity_kwh: Option<f64>,
    /// Rough home-charger estimate, e.g. "~6 hrs (home)".
    pub charging_time: Option<String>,
    pub running_cost_yearly: i64,
    pub running_cost_yearly_fmt: String,
    pub co2_reduction_kg: i64,
}

/// EV shortlist result payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EvShortlistOutcome {
    Found { results: Vec<EvPick> },
    /// No EV fits under the budget; the catalog itself was non-empty.
    NoMatch { message: String },
}

/// Selects the top electric vehicles within a budget.
///
/// A vehicle with no known price is given the benefit of the doubt and
/// kept. Highway usage orders by descending range, anything else by
/// descending efficiency; missing values sort as zero.
pub fn shortlist_evs<'a>(
    vehicles: &'a [NormalizedVehicle],
    budget: u64,
    usage: UsagePattern,
) -> Vec<&'a NormalizedVehicle> {
    let mut evs: Vec<&NormalizedVehicle> = vehicles
        .iter()
        .filter(|v| v.fuel_type == FuelType::Electric)
        .filter(|v| v.base_price.map_or(true, |price| price <= budget))
        .collect();

    match usage {
        UsagePattern::Highway => {
            evs.sort_by(|a, b| {
                let ra = a.range_km.unwrap_or(0.0);
                let rb = b.range_km.unwrap_or(0.0);
                rb.total_cmp(&ra)
            });
        }
        UsagePattern::City => {
            evs.sort_by(|a, b| {
                let ea = a.efficiency_km_per_kwh.unwrap_or(0.0);
                let eb = b.efficiency_km_per_kwh.unwrap_or(0.0);
                eb.total_cmp(&ea)
            });
        }
    }

    evs.truncate(SHORTLIST_SIZE);
    evs
}
