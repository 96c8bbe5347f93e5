//! Static city tax-rate table for on-road price calculation.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use super::city::DEFAULT_CITY;

/// Location-specific fractions applied on top of the ex-showroom price.
///
/// Insurance is not part of the tuple: it is a fixed 0.03 fraction
/// applied uniformly across cities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityTaxRate {
    /// Registration (RTO) fraction of the base price.
    pub rto: f64,
    /// Handling and other charges fraction.
    pub other: f64,
    pub label: &'static str,
    pub state: &'static str,
}

static CITY_TAX_RATES: Lazy<HashMap<&'static str, CityTaxRate>> = Lazy::new(|| {
    HashMap::from([
        (
            "New Delhi",
            CityTaxRate { rto: 0.04, other: 0.08, label: "New Delhi", state: "Low Tax Zone" },
        ),
        (
            "Delhi",
            CityTaxRate { rto: 0.04, other: 0.08, label: "Delhi", state: "Low Tax Zone" },
        ),
        (
            "Mumbai",
            CityTaxRate { rto: 0.11, other: 0.05, label: "Mumbai", state: "Maharashtra" },
        ),
        (
            "Bangalore",
            CityTaxRate { rto: 0.13, other: 0.05, label: "Bangalore", state: "Karnataka" },
        ),
        (
            "Chennai",
            CityTaxRate { rto: 0.10, other: 0.05, label: "Chennai", state: "Tamil Nadu" },
        ),
        (
            "Hyderabad",
            CityTaxRate { rto: 0.09, other: 0.05, label: "Hyderabad", state: "Telangana" },
        ),
        (
            "Pune",
            CityTaxRate { rto: 0.11, other: 0.05, label: "Pune", state: "Maharashtra" },
        ),
        (
            "Kolkata",
            CityTaxRate { rto: 0.07, other: 0.06, label: "Kolkata", state: "West Bengal" },
        ),
        (
            "Jaipur",
            CityTaxRate { rto: 0.06, other: 0.06, label: "Jaipur", state: "Rajasthan" },
        ),
        (
            "Ahmedabad",
            CityTaxRate { rto: 0.06, other: 0.05, label: "Ahmedabad", state: "Gujarat" },
        ),
        (
            "Lucknow",
            CityTaxRate { rto: 0.08, other: 0.06, label: "Lucknow", state: "Uttar Pradesh" },
        ),
    ])
});

/// Looks up the tax rates for a city.
///
/// An unknown city silently resolves to the default city's rates;
/// every caller always gets a usable tuple.
pub fn rates_for(city: &str) -> &'static CityTaxRate {
    CITY_TAX_RATES
        .get(city)
        .unwrap_or_else(|| &CITY_TAX_RATES[DEFAULT_CITY])
}
