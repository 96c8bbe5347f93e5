//! HTTP routes for the engine endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    best_ev_under_budget, calculate_costs, city_prices, commute_footprint, compare_vehicles,
    find_eco_friendly, generate_insights, ownership_projection, ApiState,
};

/// Creates the API router with all engine routes.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        // GET /api/compare?first=..&second=..
        .route("/api/compare", get(compare_vehicles))
        // GET /api/eco-search?budget_min=..&budget_max=..&body_type=..&fuel_type=..
        .route("/api/eco-search", get(find_eco_friendly))
        // GET /api/costs?daily_km=..&fuel_price=..&electricity_cost=..&fuel_mileage=..
        .route("/api/costs", get(calculate_costs))
        // GET /api/ev-picks?budget=..&usage=..
        .route("/api/ev-picks", get(best_ev_under_budget))
        // GET /api/insights?daily_km=..
        .route("/api/insights", get(generate_insights))
        // GET /api/footprint?daily_km=..&fuel=..&city_share_pct=..
        .route("/api/footprint", get(commute_footprint))
        // GET /api/ownership-projection?ice_price=..&ev_price=..&annual_km=..
        .route("/api/ownership-projection", get(ownership_projection))
        // GET /api/prices/:city
        .route("/api/prices/:city", get(city_prices))
        .with_state(state)
}
