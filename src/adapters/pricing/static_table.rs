//! Curated base-price table.
//!
//! Real-world ex-showroom prices maintained by hand, used when a
//! record carries no price and as the fallback when the live feed is
//! unreachable.

use async_trait::async_trait;
use serde::Serialize;

use crate::ports::PriceLookup;

/// One curated pricing row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedPrice {
    pub name: &'static str,
    pub fuel_label: &'static str,
    pub segment: &'static str,
    /// Ex-showroom price in ₹.
    pub base_price: u64,
    /// Range for EVs, mileage for everything else.
    pub range_label: &'static str,
    pub power_label: &'static str,
    pub popular: bool,
}

pub(crate) const CURATED_PRICES: &[CuratedPrice] = &[
    CuratedPrice { name: "Tata Nexon EV", fuel_label: "electric", segment: "SUV", base_price: 1_479_000, range_label: "465 km", power_label: "143 PS", popular: true },
    CuratedPrice { name: "MG ZS EV", fuel_label: "electric", segment: "SUV", base_price: 2_188_000, range_label: "461 km", power_label: "176 PS", popular: false },
    CuratedPrice { name: "Hyundai Creta Electric", fuel_label: "electric", segment: "SUV", base_price: 1_799_000, range_label: "473 km", power_label: "171 PS", popular: true },
    CuratedPrice { name: "BYD Atto 3", fuel_label: "electric", segment: "SUV", base_price: 2_599_000, range_label: "521 km", power_label: "204 PS", popular: false },
    CuratedPrice { name: "Tata Punch EV", fuel_label: "electric", segment: "Hatchback", base_price: 999_000, range_label: "421 km", power_label: "122 PS", popular: false },
    CuratedPrice { name: "Maruti Suzuki Baleno", fuel_label: "petrol", segment: "Hatchback", base_price: 699_000, range_label: "21.01 km/l", power_label: "89 PS", popular: true },
    CuratedPrice { name: "Hyundai i20", fuel_label: "petrol", segment: "Hatchback", base_price: 774_000, range_label: "20.2 km/l", power_label: "82 PS", popular: false },
    CuratedPrice { name: "Honda City", fuel_label: "petrol", segment: "Sedan", base_price: 1_194_000, range_label: "18.4 km/l", power_label: "121 PS", popular: false },
    CuratedPrice { name: "Toyota Innova HyCross", fuel_label: "hybrid", segment: "MPV", base_price: 1_899_000, range_label: "21.1 km/l", power_label: "186 PS", popular: false },
    CuratedPrice { name: "Maruti Grand Vitara Hybrid", fuel_label: "hybrid", segment: "SUV", base_price: 1_099_000, range_label: "27.97 km/l", power_label: "115 PS", popular: true },
    CuratedPrice { name: "Hyundai Creta", fuel_label: "petrol", segment: "SUV", base_price: 1_099_000, range_label: "17.4 km/l", power_label: "115 PS", popular: false },
    CuratedPrice { name: "Kia Seltos", fuel_label: "petrol", segment: "SUV", base_price: 1_089_000, range_label: "16.5 km/l", power_label: "115 PS", popular: false },
    CuratedPrice { name: "Tata Harrier", fuel_label: "petrol", segment: "SUV", base_price: 1_549_000, range_label: "14.6 km/l", power_label: "170 PS", popular: false },
    CuratedPrice { name: "Mahindra XUV700", fuel_label: "petrol", segment: "SUV", base_price: 1_399_000, range_label: "15.2 km/l", power_label: "200 PS", popular: true },
    CuratedPrice { name: "Maruti Suzuki Swift", fuel_label: "petrol", segment: "Hatchback", base_price: 649_000, range_label: "22.38 km/l", power_label: "82 PS", popular: false },
    CuratedPrice { name: "Tata Curvv EV", fuel_label: "electric", segment: "SUV", base_price: 1_749_000, range_label: "502 km", power_label: "167 PS", popular: false },
];

/// Price lookup over the curated table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPriceTable;

impl StaticPriceTable {
    /// All curated rows, in listing order.
    pub fn entries(&self) -> &'static [CuratedPrice] {
        CURATED_PRICES
    }

    /// Fuzzy lookup: exact name first, then a substring match in
    /// either direction, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&'static CuratedPrice> {
        let needle = name.to_lowercase();
        CURATED_PRICES
            .iter()
            .find(|p| p.name.to_lowercase() == needle)
            .or_else(|| {
                CURATED_PRICES.iter().find(|p| {
                    let row = p.name.to_lowercase();
                    needle.contains(&row) || row.contains(&needle)
                })
            })
    }
}

#[async_trait]
impl PriceLookup for StaticPriceTable {
    async fn lookup_base_price(&self, name: &str) -> Option<u64> {
        self.find(name).map(|p| p.base_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exact_name_resolves() {
        let table = StaticPriceTable;
        assert_eq!(
            table.lookup_base_price("Tata Nexon EV").await,
            Some(1_479_000)
        );
    }

    #[tokio::test]
    async fn record_name_containing_curated_name_resolves() {
        let table = StaticPriceTable;
        assert_eq!(
            table.lookup_base_price("Tata Nexon EV Empowered LR").await,
            Some(1_479_000)
        );
    }

    #[tokio::test]
    async fn curated_name_containing_record_name_resolves() {
        let table = StaticPriceTable;
        assert_eq!(table.lookup_base_price("Nexon EV").await, Some(1_479_000));
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let table = StaticPriceTable;
        assert_eq!(table.lookup_base_price("tata punch ev").await, Some(999_000));
    }

    #[tokio::test]
    async fn unknown_name_resolves_to_none() {
        let table = StaticPriceTable;
        assert_eq!(table.lookup_base_price("Batmobile").await, None);
    }

    #[test]
    fn exact_match_beats_substring_rows() {
        let table = StaticPriceTable;
        // "Hyundai Creta" is a substring of "Hyundai Creta Electric";
        // the exact row must win.
        let found = table.find("Hyundai Creta").unwrap();
        assert_eq!(found.base_price, 1_099_000);
        assert_eq!(found.fuel_label, "petrol");
    }

    #[test]
    fn table_covers_every_fuel_label() {
        let labels: std::collections::HashSet<_> =
            CURATED_PRICES.iter().map(|p| p.fuel_label).collect();
        assert!(labels.contains("electric"));
        assert!(labels.contains("hybrid"));
        assert!(labels.contains("petrol"));
    }
}
