//! CompareVehiclesHandler - side-by-side comparison of two vehicles.

use std::sync::Arc;

use crate::domain::cost::{
    five_year_ownership_cost, yearly_co2_kg, yearly_energy_cost, UsageAssumptions,
};
use crate::domain::recommendation::{
    recommendation_line, resolve_query, ComparisonOutcome, VehicleProfile,
};
use crate::domain::vehicle::NormalizedVehicle;
use crate::ports::{CatalogError, CurrencyFormatter, VehicleCatalog};

/// Query naming the two vehicles to compare.
#[derive(Debug, Clone)]
pub struct CompareVehiclesQuery {
    pub first: String,
    pub second: String,
}

/// Handler for the vehicle comparison operation.
pub struct CompareVehiclesHandler {
    catalog: Arc<dyn VehicleCatalog>,
    formatter: Arc<dyn CurrencyFormatter>,
}

impl CompareVehiclesHandler {
    pub fn new(catalog: Arc<dyn VehicleCatalog>, formatter: Arc<dyn CurrencyFormatter>) -> Self {
        Self { catalog, formatter }
    }

    fn build_profile(&self, vehicle: &NormalizedVehicle) -> VehicleProfile {
        let assumptions = UsageAssumptions::default();
        let fuel_cost_yearly = yearly_energy_cost(vehicle, &assumptions).round() as i64;
        let co2_yearly_kg = yearly_co2_kg(vehicle, &assumptions).round() as i64;
        let ownership_5y = five_year_ownership_cost(vehicle, &assumptions).round() as i64;

        VehicleProfile {
            name: vehicle.display_name.clone(),
            image: vehicle.image.clone(),
            manufacturer: vehicle.manufacturer.clone(),
            category: vehicle.category.clone(),
            fuel_type: vehicle.fuel_type,
            base_price: vehicle.base_price,
            base_price_fmt: self.formatter.format_or_na(vehicle.base_price),
            fuel_cost_yearly,
            fuel_cost_yearly_fmt: self.formatter.format(fuel_cost_yearly),
            co2_yearly_kg,
            ownership_5y,
            ownership_5y_fmt: self.formatter.format(ownership_5y),
            sustainability_score: vehicle.sustainability_score,
            range_km: vehicle.range_km,
            battery_capacity_kwh: vehicle.battery_capacity_kwh,
            efficiency_km_per_kwh: vehicle.efficiency_km_per_kwh,
            fuel_economy_mpg: vehicle.fuel_economy_mpg,
        }
    }

    /// Resolves both queries and builds the comparison payload.
    ///
    /// An unresolved query short-circuits into `NotFound` carrying the
    /// failing input verbatim; the first query is reported when both
    /// fail.
    pub async fn handle(
        &self,
        query: CompareVehiclesQuery,
    ) -> Result<ComparisonOutcome, CatalogError> {
        let snapshot = self.catalog.get_all().await?;

        let first = resolve_query(&snapshot.vehicles, &query.first);
        let second = resolve_query(&snapshot.vehicles, &query.second);

        let (first, second) = match (first, second) {
            (Some(a), Some(b)) => (a, b),
            (None, _) => {
                return Ok(ComparisonOutcome::NotFound {
                    missing: query.first,
                })
            }
            (_, None) => {
                return Ok(ComparisonOutcome::NotFound {
                    missing: query.second,
                })
            }
        };

        let profile1 = self.build_profile(first);
        let profile2 = self.build_profile(second);
        let recommendation = recommendation_line(&profile1, &profile2);

        Ok(ComparisonOutcome::Compared {
            vehicle1: Box::new(profile1),
            vehicle2: Box::new(profile2),
            recommendation,
        })
    }
}
