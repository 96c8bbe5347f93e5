//! CalculateCostsHandler - the commute cost comparison operation.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::cost::{calculate_costs, BreakEven, CalculatorInputs};
use crate::ports::CurrencyFormatter;

/// Calculator payload: every money figure in raw and display form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostResult {
    pub monthly_fuel_cost: i64,
    pub monthly_fuel_cost_fmt: String,
    pub monthly_ev_cost: i64,
    pub monthly_ev_cost_fmt: String,
    pub yearly_fuel_cost: i64,
    pub yearly_ev_cost: i64,
    pub monthly_saving: i64,
    pub monthly_saving_fmt: String,
    pub yearly_saving: i64,
    pub five_year_saving: i64,
    pub five_year_saving_fmt: String,
    pub break_even: BreakEven,
}

/// Handler for the cost calculator operation.
///
/// Pure: no catalog dependency, no errors. Invalid numeric inputs are
/// silently defaulted inside the domain calculator.
pub struct CalculateCostsHandler {
    formatter: Arc<dyn CurrencyFormatter>,
}

impl CalculateCostsHandler {
    pub fn new(formatter: Arc<dyn CurrencyFormatter>) -> Self {
        Self { formatter }
    }

    pub fn handle(&self, inputs: CalculatorInputs) -> CostResult {
        let breakdown = calculate_costs(&inputs);
        CostResult {
            monthly_fuel_cost: breakdown.monthly_fuel_cost,
            monthly_fuel_cost_fmt: self.formatter.format(breakdown.monthly_fuel_cost),
            monthly_ev_cost: breakdown.monthly_ev_cost,
            monthly_ev_cost_fmt: self.formatter.format(breakdown.monthly_ev_cost),
            yearly_fuel_cost: breakdown.yearly_fuel_cost,
            yearly_ev_cost: breakdown.yearly_ev_cost,
            monthly_saving: breakdown.monthly_saving,
            monthly_saving_fmt: self.formatter.format(breakdown.monthly_saving),
            yearly_saving: breakdown.yearly_saving,
            five_year_saving: breakdown.five_year_saving,
            five_year_saving_fmt: self.formatter.format(breakdown.five_year_saving),
            break_even: breakdown.break_even,
        }
    }
}
