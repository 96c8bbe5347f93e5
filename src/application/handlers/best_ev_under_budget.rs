//! BestEvUnderBudgetHandler - EV shortlist under a budget.

use std::sync::Arc;

use crate::domain::cost::{
    constants, yearly_co2_savings_kg, yearly_energy_cost, UsageAssumptions,
};
use crate::domain::recommendation::{shortlist_evs, EvPick, EvShortlistOutcome, UsagePattern};
use crate::domain::vehicle::VehicleRecord;
use crate::ports::{CatalogError, CurrencyFormatter, VehicleCatalog};

/// Budget assumed when the caller names none.
const DEFAULT_BUDGET_INR: u64 = 2_000_000;

const NO_MATCH_MESSAGE: &str = "No EVs found under your budget. Try increasing it!";

/// Query for the EV shortlist.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestEvUnderBudgetQuery {
    pub budget: Option<u64>,
    pub usage: UsagePattern,
}

/// Handler for the EV-under-budget operation.
pub struct BestEvUnderBudgetHandler {
    catalog: Arc<dyn VehicleCatalog>,
    formatter: Arc<dyn CurrencyFormatter>,
}

impl BestEvUnderBudgetHandler {
    pub fn new(catalog: Arc<dyn VehicleCatalog>, formatter: Arc<dyn CurrencyFormatter>) -> Self {
        Self { catalog, formatter }
    }

    /// Shortlists up to four EVs for the budget and usage pattern.
    pub async fn handle(
        &self,
        query: BestEvUnderBudgetQuery,
    ) -> Result<EvShortlistOutcome, CatalogError> {
        let snapshot = self.catalog.get_all().await?;
        let budget = query.budget.unwrap_or(DEFAULT_BUDGET_INR);
        let picks = shortlist_evs(&snapshot.vehicles, budget, query.usage);

        if picks.is_empty() {
            return Ok(EvShortlistOutcome::NoMatch {
                message: NO_MATCH_MESSAGE.to_string(),
            });
        }

        let assumptions = UsageAssumptions::default();
        let results = picks
            .into_iter()
            .map(|ev| {
                let running_cost = yearly_energy_cost(ev, &assumptions).round() as i64;
                let charging_time = VehicleRecord::positive(ev.battery_capacity_kwh)
                    .map(|kwh| {
                        format!("~{} hrs (home)", (kwh / constants::HOME_CHARGER_KW).round())
                    });
                EvPick {
                    name: ev.display_name.clone(),
                    image: ev.image.clone(),
                    base_price: ev.base_price,
                    base_price_fmt: self.formatter.format_or_na(ev.base_price),
                    range_km: ev.range_km,
                    battery_capacity_kwh: ev.battery_capacity_kwh,
                    charging_time,
                    running_cost_yearly: running_cost,
                    running_cost_yearly_fmt: self.formatter.format(running_cost),
                    co2_reduction_kg: yearly_co2_savings_kg(ev, &assumptions).round() as i64,
                }
            })
            .collect();

        Ok(EvShortlistOutcome::Found { results })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::pricing::InrFormatter;
    use crate::domain::vehicle::NormalizedVehicle;
    use crate::ports::CatalogSnapshot;
    use async_trait::async_trait;

    struct FixedCatalog(Vec<NormalizedVehicle>);

    #[async_trait]
    impl VehicleCatalog for FixedCatalog {
        async fn get_all(&self) -> Result<CatalogSnapshot, CatalogError> {
            Ok(CatalogSnapshot::new(self.0.clone()))
        }

        async fn refresh(&self) -> Result<CatalogSnapshot, CatalogError> {
            self.get_all().await
        }

        async fn invalidate(&self) {}
    }

    fn ev(name: &str, price: u64, range_km: f64, battery: Option<f64>) -> NormalizedVehicle {
        NormalizedVehicle::from_record(
            VehicleRecord {
                manufacturer: "Test".to_string(),
                name: name.to_string(),
                year: 2024,
                category: "Electric".to_string(),
                lifecycle_gco2_km: None,
                epa_g_per_mile: None,
                co2_per_100km: None,
                battery_capacity_kwh: battery,
                range_km: Some(range_km),
                fuel_economy_mpg: None,
                efficiency_km_per_kwh: Some(7.0),
                maintenance_yearly_inr: None,
                ex_showroom_price_inr: Some(price),
                image: None,
            },
            None,
        )
    }

    fn handler(vehicles: Vec<NormalizedVehicle>) -> BestEvUnderBudgetHandler {
        BestEvUnderBudgetHandler::new(Arc::new(FixedCatalog(vehicles)), Arc::new(InrFormatter))
    }

    #[tokio::test]
    async fn shortlists_evs_within_default_budget() {
        let handler = handler(vec![
            ev("Affordable", 1_479_000, 465.0, Some(40.5)),
            ev("Premium", 2_599_000, 521.0, Some(60.5)),
        ]);
        let outcome = handler.handle(BestEvUnderBudgetQuery::default()).await.unwrap();

        match outcome {
            EvShortlistOutcome::Found { results } => {
                assert_eq!(results.len(), 1);
                assert_eq!(results[0].name, "Test Affordable (2024)");
            }
            other => panic!("expected a shortlist, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn highway_usage_prefers_range() {
        let handler = handler(vec![
            ev("Short", 1_000_000, 300.0, Some(30.0)),
            ev("Long", 1_200_000, 500.0, Some(50.0)),
        ]);
        let outcome = handler
            .handle(BestEvUnderBudgetQuery {
                budget: Some(1_500_000),
                usage: UsagePattern::Highway,
            })
            .await
            .unwrap();

        match outcome {
            EvShortlistOutcome::Found { results } => {
                assert_eq!(results[0].name, "Test Long (2024)");
            }
            other => panic!("expected a shortlist, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_shortlist_is_no_match_payload() {
        let handler = handler(vec![ev("Premium", 2_599_000, 521.0, Some(60.5))]);
        let outcome = handler
            .handle(BestEvUnderBudgetQuery {
                budget: Some(1_000_000),
                usage: UsagePattern::City,
            })
            .await
            .unwrap();

        match outcome {
            EvShortlistOutcome::NoMatch { message } => {
                assert!(message.contains("increasing"));
            }
            other => panic!("expected no match, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn charging_time_derives_from_battery_capacity() {
        let handler = handler(vec![ev("Known", 1_479_000, 465.0, Some(40.5))]);
        let outcome = handler.handle(BestEvUnderBudgetQuery::default()).await.unwrap();

        match outcome {
            EvShortlistOutcome::Found { results } => {
                // 40.5 kWh / 7.2 kW = 5.6 -> ~6 hrs.
                assert_eq!(results[0].charging_time.as_deref(), Some("~6 hrs (home)"));
            }
            other => panic!("expected a shortlist, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_battery_has_no_charging_estimate() {
        let handler = handler(vec![ev("Unknown", 1_479_000, 465.0, None)]);
        let outcome = handler.handle(BestEvUnderBudgetQuery::default()).await.unwrap();

        match outcome {
            EvShortlistOutcome::Found { results } => {
                assert_eq!(results[0].charging_time, None);
            }
            other => panic!("expected a shortlist, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn ev_running_costs_and_reduction_are_positive() {
        let handler = handler(vec![ev("Nexon EV", 1_479_000, 465.0, Some(40.5))]);
        let outcome = handler.handle(BestEvUnderBudgetQuery::default()).await.unwrap();

        match outcome {
            EvShortlistOutcome::Found { results } => {
                assert!(results[0].running_cost_yearly > 0);
                assert!(results[0].co2_reduction_kg > 0);
            }
            other => panic!("expected a shortlist, got {:?}", other),
        }
    }
}
