//! Query handlers for the five composed engine operations.
//!
//! Each handler pairs a query struct with a `handle` method and
//! depends only on ports, so any presentation technology can reuse
//! them verbatim.

mod best_ev_under_budget;
mod calculate_costs;
mod compare_vehicles;
mod find_eco_friendly;
mod generate_insights;

pub use best_ev_under_budget::{BestEvUnderBudgetHandler, BestEvUnderBudgetQuery};
pub use calculate_costs::{CalculateCostsHandler, CostResult};
pub use compare_vehicles::{CompareVehiclesHandler, CompareVehiclesQuery};
pub use find_eco_friendly::{FindEcoFriendlyHandler, FindEcoFriendlyQuery};
pub use generate_insights::{GenerateInsightsHandler, GenerateInsightsQuery, InsightSet};
