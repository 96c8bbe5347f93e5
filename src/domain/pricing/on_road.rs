//! On-road price derivation.

use serde::Serialize;

use super::tax_rates::rates_for;

/// Fixed insurance fraction, uniform across cities.
const INSURANCE_FRACTION: f64 = 0.03;

/// On-road price with its additive components.
///
/// Each component is rounded independently before summing; the order
/// is part of the compatibility surface and produces byte-identical
/// integer totals across implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnRoadBreakdown {
    pub base: u64,
    pub insurance: u64,
    pub rto: u64,
    pub other: u64,
    pub total: u64,
}

fn rounded_fraction(base: u64, fraction: f64) -> u64 {
    (base as f64 * fraction).round() as u64
}

/// Computes the on-road price breakdown for a city.
///
/// Unknown cities resolve to the default city's rates.
pub fn on_road_breakdown(base_price: u64, city: &str) -> OnRoadBreakdown {
    let rates = rates_for(city);
    let insurance = rounded_fraction(base_price, INSURANCE_FRACTION);
    let rto = rounded_fraction(base_price, rates.rto);
    let other = rounded_fraction(base_price, rates.other);
    OnRoadBreakdown {
        base: base_price,
        insurance,
        rto,
        other,
        total: base_price + insurance + rto + other,
    }
}

/// Computes the on-road price total for a city.
pub fn on_road_price(base_price: u64, city: &str) -> u64 {
    on_road_breakdown(base_price, city).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::DEFAULT_CITY;
    use proptest::prelude::*;

    #[test]
    fn mumbai_example_price() {
        // 1000000 + 30000 insurance + 110000 rto + 50000 other
        assert_eq!(on_road_price(1_000_000, "Mumbai"), 1_190_000);
    }

    #[test]
    fn breakdown_components_sum_to_total() {
        let b = on_road_breakdown(1_479_000, "Bangalore");
        assert_eq!(b.total, b.base + b.insurance + b.rto + b.other);
    }

    #[test]
    fn components_round_independently() {
        // 33 * 0.03 = 0.99 -> 1; 33 * 0.11 = 3.63 -> 4; 33 * 0.05 = 1.65 -> 2.
        // Rounding once at the end would give a different total.
        let b = on_road_breakdown(33, "Mumbai");
        assert_eq!(b.insurance, 1);
        assert_eq!(b.rto, 4);
        assert_eq!(b.other, 2);
        assert_eq!(b.total, 40);
    }

    #[test]
    fn unknown_city_equals_default_city() {
        assert_eq!(
            on_road_price(2_188_000, "Atlantis"),
            on_road_price(2_188_000, DEFAULT_CITY)
        );
    }

    #[test]
    fn zero_base_price_stays_zero() {
        assert_eq!(on_road_price(0, "Mumbai"), 0);
    }

    proptest! {
        #[test]
        fn monotonically_increasing_in_base_price(
            base in 0u64..50_000_000,
            bump in 1u64..1_000_000,
        ) {
            prop_assert!(
                on_road_price(base + bump, "Mumbai") > on_road_price(base, "Mumbai")
            );
        }

        #[test]
        fn unknown_cities_always_match_default(base in 0u64..50_000_000) {
            prop_assert_eq!(
                on_road_price(base, "Nowhereville"),
                on_road_price(base, DEFAULT_CITY)
            );
        }
    }
}
