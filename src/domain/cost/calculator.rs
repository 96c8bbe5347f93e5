//! Interactive commute cost calculator.
//!
//! Pure and catalog-independent: compares a generic ICE commute with a
//! generic EV commute under the calculator surface's own stated
//! defaults. Inputs are lenient - anything missing or non-positive is
//! silently defaulted, never rejected, because the consuming surfaces
//! are exploratory calculators.

use serde::{Deserialize, Serialize};

use super::constants;

/// Raw calculator inputs before defaulting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct CalculatorInputs {
    pub daily_km: Option<f64>,
    pub fuel_price: Option<f64>,
    pub electricity_cost: Option<f64>,
    pub fuel_mileage: Option<f64>,
}

impl CalculatorInputs {
    fn resolve(value: Option<f64>, default: f64) -> f64 {
        match value {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => default,
        }
    }

    /// Applies the calculator defaults to each input independently.
    fn resolved(&self) -> (f64, f64, f64, f64) {
        (
            Self::resolve(self.daily_km, constants::CALCULATOR_DEFAULT_DAILY_KM),
            Self::resolve(self.fuel_price, constants::CALCULATOR_DEFAULT_FUEL_PRICE_INR_PER_L),
            Self::resolve(
                self.electricity_cost,
                constants::CALCULATOR_DEFAULT_ELECTRICITY_INR_PER_KWH,
            ),
            Self::resolve(self.fuel_mileage, constants::CALCULATOR_DEFAULT_MILEAGE_KM_PER_L),
        )
    }
}

/// Break-even horizon on the fixed EV price premium.
///
/// `Never` is a real state: when the EV commute saves nothing per year
/// the premium is never recovered, and callers must be able to branch
/// on that rather than compare against a large number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BreakEven {
    Years { years: f64 },
    Never,
}

impl BreakEven {
    pub fn is_never(&self) -> bool {
        matches!(self, BreakEven::Never)
    }
}

/// Calculator output. Raw rupee values; formatting happens at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub monthly_fuel_cost: i64,
    pub monthly_ev_cost: i64,
    pub yearly_fuel_cost: i64,
    pub yearly_ev_cost: i64,
    pub monthly_saving: i64,
    pub yearly_saving: i64,
    pub five_year_saving: i64,
    pub break_even: BreakEven,
}

/// Computes the commute cost comparison.
///
/// Deterministic: the same inputs always produce the same breakdown.
pub fn calculate_costs(inputs: &CalculatorInputs) -> CostBreakdown {
    let (daily_km, fuel_price, electricity_cost, fuel_mileage) = inputs.resolved();

    let daily_fuel_cost = daily_km / fuel_mileage * fuel_price;
    let monthly_fuel_cost = daily_fuel_cost * 30.0;
    let yearly_fuel_cost = daily_fuel_cost * constants::DAYS_PER_YEAR;

    let daily_ev_cost = daily_km / constants::AVG_EV_EFFICIENCY_KM_PER_KWH * electricity_cost;
    let monthly_ev_cost = daily_ev_cost * 30.0;
    let yearly_ev_cost = daily_ev_cost * constants::DAYS_PER_YEAR;

    let yearly_saving = yearly_fuel_cost - yearly_ev_cost;
    let five_year_saving = yearly_saving * constants::OWNERSHIP_YEARS;

    let break_even = if yearly_saving > 0.0 {
        let years = constants::EV_PRICE_PREMIUM_INR / yearly_saving;
        BreakEven::Years {
            years: (years * 10.0).round() / 10.0,
        }
    } else {
        BreakEven::Never
    };

    CostBreakdown {
        monthly_fuel_cost: monthly_fuel_cost.round() as i64,
        monthly_ev_cost: monthly_ev_cost.round() as i64,
        yearly_fuel_cost: yearly_fuel_cost.round() as i64,
        yearly_ev_cost: yearly_ev_cost.round() as i64,
        monthly_saving: (monthly_fuel_cost - monthly_ev_cost).round() as i64,
        yearly_saving: yearly_saving.round() as i64,
        five_year_saving: five_year_saving.round() as i64,
        break_even,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(daily_km: f64, fuel_price: f64, electricity_cost: f64) -> CalculatorInputs {
        CalculatorInputs {
            daily_km: Some(daily_km),
            fuel_price: Some(fuel_price),
            electricity_cost: Some(electricity_cost),
            fuel_mileage: None,
        }
    }

    #[test]
    fn documented_defaults_produce_known_breakdown() {
        let breakdown = calculate_costs(&inputs(30.0, 104.0, 8.0));

        // 2 litres a day at ₹104.
        assert_eq!(breakdown.monthly_fuel_cost, 6_240);
        assert_eq!(breakdown.yearly_fuel_cost, 75_920);
        // 30/7 kWh a day at ₹8.
        assert_eq!(breakdown.monthly_ev_cost, 1_029);
        assert_eq!(breakdown.yearly_ev_cost, 12_514);
        assert_eq!(breakdown.monthly_saving, 5_211);
        assert_eq!(breakdown.yearly_saving, 63_406);
        assert_eq!(breakdown.five_year_saving, 317_029);
        assert_eq!(breakdown.break_even, BreakEven::Years { years: 7.9 });
    }

    #[test]
    fn same_inputs_are_deterministic() {
        let a = calculate_costs(&inputs(30.0, 104.0, 8.0));
        let b = calculate_costs(&inputs(30.0, 104.0, 8.0));
        assert_eq!(a, b);
    }

    #[test]
    fn missing_inputs_default_independently() {
        let defaulted = calculate_costs(&CalculatorInputs::default());
        let explicit = calculate_costs(&inputs(30.0, 104.0, 8.0));
        assert_eq!(defaulted, explicit);
    }

    #[test]
    fn non_positive_inputs_default_individually() {
        let breakdown = calculate_costs(&CalculatorInputs {
            daily_km: Some(-5.0),
            fuel_price: Some(0.0),
            electricity_cost: Some(f64::NAN),
            fuel_mileage: Some(20.0),
        });
        let expected = calculate_costs(&CalculatorInputs {
            daily_km: None,
            fuel_price: None,
            electricity_cost: None,
            fuel_mileage: Some(20.0),
        });
        assert_eq!(breakdown, expected);
    }

    #[test]
    fn cheap_fuel_never_breaks_even() {
        // Fuel so cheap the EV commute costs more per year.
        let breakdown = calculate_costs(&inputs(30.0, 1.0, 8.0));
        assert!(breakdown.yearly_saving < 0);
        assert!(breakdown.break_even.is_never());
    }

    #[test]
    fn break_even_is_rounded_to_one_decimal() {
        let breakdown = calculate_costs(&inputs(30.0, 104.0, 8.0));
        match breakdown.break_even {
            BreakEven::Years { years } => {
                assert!((years * 10.0).fract().abs() < 1e-9);
            }
            BreakEven::Never => panic!("expected a finite break-even"),
        }
    }

    #[test]
    fn never_serializes_as_tagged_variant() {
        let json = serde_json::to_string(&BreakEven::Never).unwrap();
        assert_eq!(json, r#"{"kind":"never"}"#);
    }
}
