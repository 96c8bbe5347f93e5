//! Side-by-side vehicle comparison: query resolution and payloads.

use serde::Serialize;

use crate::domain::foundation::SustainabilityScore;
use crate::domain::vehicle::{FuelType, NormalizedVehicle};

/// Resolves a user query against the catalog.
///
/// Case-insensitive substring match, tried in preference order: the
/// display name first, then the bare model name, then the
/// manufacturer+model concatenation. Within a pass, catalog order
/// decides.
pub fn resolve_query<'a>(
    vehicles: &'a [NormalizedVehicle],
    query: &str,
) -> Option<&'a NormalizedVehicle> {
    let needle = query.to_lowercase().trim().to_string();
    if needle.is_empty() {
        return None;
    }

    vehicles
        .iter()
        .find(|v| v.display_name.to_lowercase().contains(&needle))
        .or_else(|| {
            vehicles
                .iter()
                .find(|v| v.name.to_lowercase().contains(&needle))
        })
        .or_else(|| {
            vehicles.iter().find(|v| {
                format!("{} {}", v.manufacturer, v.name)
                    .to_lowercase()
                    .contains(&needle)
            })
        })
}

/// Per-vehicle comparison profile: raw values alongside display forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    pub name: String,
    pub image: Option<String>,
    pub manufacturer: String,
    pub category: String,
    pub fuel_type: FuelType,
    pub base_price: Option<u64>,
    pub base_price_fmt: String,
    pub fuel_cost_yearly: i64,
    pub fuel_cost_yearly_fmt: String,
    pub co2_yearly_kg: i64,
    pub ownership_5y: i64,
    pub ownership_5y_fmt: String,
    pub sustainability_score: SustainabilityScore,
    pub range_km: Option<f64>,
    pub battery_capacity_kwh: Option<f64>,
    pub efficiency_km_per_kwh: Option<f64>,
    pub fuel_economy_mpg: Option<f64>,
}

/// Comparison result payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ComparisonOutcome {
    Compared {
        vehicle1: Box<VehicleProfile>,
        vehicle2: Box<VehicleProfile>,
        recommendation: String,
    },
    /// One of the queries matched nothing; `missing` echoes the
    /// unresolved input verbatim for display.
    NotFound { missing: String },
}

/// Builds the recommendation line from two scored profiles.
///
/// A strictly higher score wins; equal scores get the explicit
/// both-similar message rather than a silent default winner.
pub fn recommendation_line(first: &VehicleProfile, second: &VehicleProfile) -> String {
    if first.sustainability_score > second.sustainability_score {
        format!(
            "🌱 {} is the greener choice with a nutrition score of {}.",
            first.name, first.sustainability_score
        )
    } else if second.sustainability_score > first.sustainability_score {
        format!(
            "🌱 {} is the greener choice with a nutrition score of {}.",
            second.name, second.sustainability_score
        )
    } else {
        "🌱 Both vehicles have similar sustainability scores!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::VehicleRecord;

    fn vehicle(manufacturer: &str, name: &str) -> NormalizedVehicle {
        NormalizedVehicle::from_record(
            VehicleRecord {
                manufacturer: manufacturer.to_string(),
                name: name.to_string(),
                year: 2024,
                category: "Electric".to_string(),
                lifecycle_gco2_km: None,
                epa_g_per_mile: None,
                co2_per_100km: None,
                battery_capacity_kwh: None,
                range_km: None,
                fuel_economy_mpg: None,
                efficiency_km_per_kwh: None,
                maintenance_yearly_inr: None,
                ex_showroom_price_inr: None,
                image: None,
            },
            None,
        )
    }

    fn profile(name: &str, score: u8) -> VehicleProfile {
        VehicleProfile {
            name: name.to_string(),
            image: None,
            manufacturer: "Test".to_string(),
            category: "Electric".to_string(),
            fuel_type: FuelType::Electric,
            base_price: None,
            base_price_fmt: "N/A".to_string(),
            fuel_cost_yearly: 0,
            fuel_cost_yearly_fmt: "₹0".to_string(),
            co2_yearly_kg: 0,
            ownership_5y: 0,
            ownership_5y_fmt: "₹0".to_string(),
            sustainability_score: SustainabilityScore::new(score),
            range_km: None,
            battery_capacity_kwh: None,
            efficiency_km_per_kwh: None,
            fuel_economy_mpg: None,
        }
    }

    #[test]
    fn resolves_by_display_name_substring() {
        let vehicles = vec![vehicle("Tata", "Nexon EV"), vehicle("MG", "ZS EV")];
        let found = resolve_query(&vehicles, "nexon ev (2024)").unwrap();
        assert_eq!(found.name, "Nexon EV");
    }

    #[test]
    fn resolves_by_bare_model_name() {
        let vehicles = vec![vehicle("Tata", "Nexon EV")];
        assert!(resolve_query(&vehicles, "nexon").is_some());
    }

    #[test]
    fn resolves_by_manufacturer_and_model() {
        let vehicles = vec![vehicle("Tata", "Nexon EV")];
        assert!(resolve_query(&vehicles, "tata nexon").is_some());
    }

    #[test]
    fn resolution_is_case_insensitive_and_trims() {
        let vehicles = vec![vehicle("Tata", "Nexon EV")];
        assert!(resolve_query(&vehicles, "  NEXON  ").is_some());
    }

    #[test]
    fn unmatched_query_resolves_to_none() {
        let vehicles = vec![vehicle("Tata", "Nexon EV")];
        assert!(resolve_query(&vehicles, "zzz-nonexistent").is_none());
    }

    #[test]
    fn empty_query_never_matches() {
        let vehicles = vec![vehicle("Tata", "Nexon EV")];
        assert!(resolve_query(&vehicles, "   ").is_none());
    }

    #[test]
    fn catalog_order_decides_within_a_pass() {
        // Both display names contain "city"; the earlier catalog entry
        // wins.
        let vehicles = vec![vehicle("Honda", "City"), vehicle("City Motors", "Sprint")];
        let found = resolve_query(&vehicles, "city").unwrap();
        assert_eq!(found.manufacturer, "Honda");
    }

    #[test]
    fn higher_score_wins_recommendation() {
        let line = recommendation_line(&profile("A", 18), &profile("B", 9));
        assert!(line.contains("A is the greener choice"));
        assert!(line.contains("18/20"));
    }

    #[test]
    fn second_vehicle_can_win() {
        let line = recommendation_line(&profile("A", 7), &profile("B", 15));
        assert!(line.contains("B is the greener choice"));
    }

    #[test]
    fn equal_scores_produce_similar_message() {
        let line = recommendation_line(&profile("A", 12), &profile("B", 12));
        assert!(line.contains("similar sustainability scores"));
    }

    #[test]
    fn not_found_serializes_with_single_discriminant() {
        let outcome = ComparisonOutcome::NotFound {
            missing: "zzz-nonexistent".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "notFound");
        assert_eq!(json["missing"], "zzz-nonexistent");
    }
}
