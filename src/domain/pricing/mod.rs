//! Pricing module - city tax rates and on-road price derivation.

mod city;
mod on_road;
mod tax_rates;

pub use city::{canonical_city, DEFAULT_CITY, SUPPORTED_CITIES};
pub use on_road::{on_road_breakdown, on_road_price, OnRoadBreakdown};
pub use tax_rates::{rates_for, CityTaxRate};
