//! FindEcoFriendlyHandler - ranked eco search over the catalog.

use std::sync::Arc;

use crate::domain::cost::{yearly_co2_savings_kg, yearly_cost_savings, UsageAssumptions};
use crate::domain::recommendation::{
    rank_eco_friendly, EcoAlternative, EcoCriteria, EcoPick, EcoSearchOutcome,
};
use crate::ports::{CatalogError, CurrencyFormatter, VehicleCatalog};

/// Number of runner-up suggestions next to the winner.
const ALTERNATIVES_SHOWN: usize = 3;

const NO_MATCH_MESSAGE: &str =
    "No vehicles found matching your criteria. Try widening your filters!";

/// Query carrying the eco search filters.
#[derive(Debug, Clone, Default)]
pub struct FindEcoFriendlyQuery {
    pub criteria: EcoCriteria,
}

/// Handler for the eco-friendly search operation.
pub struct FindEcoFriendlyHandler {
    catalog: Arc<dyn VehicleCatalog>,
    formatter: Arc<dyn CurrencyFormatter>,
}

impl FindEcoFriendlyHandler {
    pub fn new(catalog: Arc<dyn VehicleCatalog>, formatter: Arc<dyn CurrencyFormatter>) -> Self {
        Self { catalog, formatter }
    }

    /// Filters, ranks, and packages the best vehicle with alternatives.
    ///
    /// An empty result set is a `NoMatch` payload, never an empty
    /// success.
    pub async fn handle(
        &self,
        query: FindEcoFriendlyQuery,
    ) -> Result<EcoSearchOutcome, CatalogError> {
        let snapshot = self.catalog.get_all().await?;
        let ranked = rank_eco_friendly(&snapshot.vehicles, &query.criteria);

        let Some(best) = ranked.first() else {
            return Ok(EcoSearchOutcome::NoMatch {
                message: NO_MATCH_MESSAGE.to_string(),
            });
        };

        let assumptions = UsageAssumptions::default();
        let co2_saved = yearly_co2_savings_kg(best, &assumptions).round() as i64;
        let cost_saved = yearly_cost_savings(best, &assumptions).round() as i64;

        Ok(EcoSearchOutcome::Found {
            best: EcoPick {
                name: best.display_name.clone(),
                image: best.image.clone(),
                category: best.category.clone(),
                fuel_type: best.fuel_type,
                base_price: best.base_price,
                base_price_fmt: self.formatter.format_or_na(best.base_price),
                sustainability_score: best.sustainability_score,
            },
            co2_saved_yearly_kg: co2_saved,
            cost_saved_yearly: cost_saved,
            cost_saved_yearly_fmt: self.formatter.format(cost_saved),
            alternatives: ranked
                .iter()
                .skip(1)
                .take(ALTERNATIVES_SHOWN)
                .map(|v| EcoAlternative {
                    name: v.display_name.clone(),
                    fuel_type: v.fuel_type,
                    base_price: v.base_price,
                    base_price_fmt: self.formatter.format_or_na(v.base_price),
                })
                .collect(),
        })
    }
}
