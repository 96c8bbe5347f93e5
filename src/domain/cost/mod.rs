//! Cost module - running-cost and CO₂ projection.

mod assumptions;
mod calculator;
pub mod constants;
mod footprint;
mod projection;
mod projector;

pub use assumptions::UsageAssumptions;
pub use calculator::{calculate_costs, BreakEven, CalculatorInputs, CostBreakdown};
pub use footprint::{commute_footprint, CommuteFootprint, CommuteFuel};
pub use projection::{project_ownership, OwnershipProjection, YearPoint};
pub use projector::{
    five_year_ownership_cost, yearly_co2_kg, yearly_co2_savings_kg, yearly_cost_savings,
    yearly_energy_cost,
};
