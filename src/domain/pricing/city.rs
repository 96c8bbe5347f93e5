//! City name canonicalization.
//!
//! Maps free-form city names (including common aliases and nearby
//! satellite cities) onto the canonical set the tax-rate table knows.

/// Cities with a known tax-rate tuple.
pub const SUPPORTED_CITIES: &[&str] = &[
    "New Delhi",
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Chennai",
    "Hyderabad",
    "Pune",
    "Kolkata",
    "Jaipur",
    "Ahmedabad",
    "Lucknow",
];

/// The fallback city for anything unrecognized.
pub const DEFAULT_CITY: &str = "New Delhi";

/// Alias and satellite-city rows. Satellite cities resolve to the
/// nearest supported one.
const CITY_ALIASES: &[(&str, &str)] = &[
    ("new delhi", "New Delhi"),
    ("delhi", "New Delhi"),
    ("nct of delhi", "New Delhi"),
    ("mumbai", "Mumbai"),
    ("bombay", "Mumbai"),
    ("bengaluru", "Bangalore"),
    ("bangalore", "Bangalore"),
    ("chennai", "Chennai"),
    ("madras", "Chennai"),
    ("hyderabad", "Hyderabad"),
    ("pune", "Pune"),
    ("poona", "Pune"),
    ("kolkata", "Kolkata"),
    ("calcutta", "Kolkata"),
    ("jaipur", "Jaipur"),
    ("ahmedabad", "Ahmedabad"),
    ("amdavad", "Ahmedabad"),
    ("lucknow", "Lucknow"),
    ("noida", "New Delhi"),
    ("gurgaon", "New Delhi"),
    ("gurugram", "New Delhi"),
    ("ghaziabad", "New Delhi"),
    ("faridabad", "New Delhi"),
    ("thane", "Mumbai"),
    ("navi mumbai", "Mumbai"),
    ("mysuru", "Bangalore"),
    ("mysore", "Bangalore"),
    ("secunderabad", "Hyderabad"),
    ("pimpri-chinchwad", "Pune"),
    ("howrah", "Kolkata"),
];

/// Resolves a free-form city name to a canonical supported city.
///
/// Unknown names resolve to the default city, never an error.
pub fn canonical_city(input: &str) -> &'static str {
    let lowered = input.trim().to_lowercase();
    CITY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(DEFAULT_CITY)
}
