//! HTTP handlers wiring axum routes to the application layer.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json, Response};
use http::StatusCode;

use crate::adapters::pricing::LivePriceFeed;
use crate::application::handlers::{
    BestEvUnderBudgetHandler, BestEvUnderBudgetQuery, CalculateCostsHandler,
    CompareVehiclesHandler, CompareVehiclesQuery, FindEcoFriendlyHandler, FindEcoFriendlyQuery,
    GenerateInsightsHandler, GenerateInsightsQuery,
};
use crate::domain::cost::{
    commute_footprint as footprint, constants, project_ownership, CalculatorInputs, CommuteFuel,
};
use crate::domain::pricing::on_road_breakdown;
use crate::domain::recommendation::{BodyFilter, EcoCriteria, FuelFilter, UsagePattern};
use crate::domain::vehicle::{BodySegment, FuelType};
use crate::ports::{CatalogError, CurrencyFormatter};

use super::dto::{
    CompareParams, CostParams, EcoSearchParams, ErrorResponse, EvShortlistParams, FootprintParams,
    InsightParams, PriceSheetResponse, PricedCarResponse, ProjectionParams,
};

/// Shared state for the API routes.
#[derive(Clone)]
pub struct ApiState {
    pub compare: Arc<CompareVehiclesHandler>,
    pub eco_search: Arc<FindEcoFriendlyHandler>,
    pub costs: Arc<CalculateCostsHandler>,
    pub ev_shortlist: Arc<BestEvUnderBudgetHandler>,
    pub insights: Arc<GenerateInsightsHandler>,
    pub price_feed: Arc<LivePriceFeed>,
    pub formatter: Arc<dyn CurrencyFormatter>,
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Upstream(String),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, ErrorResponse::upstream(msg)),
        };
        (status, Json(error)).into_response()
    }
}

/// Parses the body/fuel filter labels; "all" and absence pass everything.
fn parse_filters(
    body_type: Option<&str>,
    fuel_type: Option<&str>,
) -> Result<(BodyFilter, FuelFilter), ApiError> {
    let body = match body_type {
        None => BodyFilter::All,
        Some(label) if label.eq_ignore_ascii_case("all") => BodyFilter::All,
        Some(label) => BodySegment::parse(label)
            .map(BodyFilter::Only)
            .ok_or_else(|| ApiError::BadRequest(format!("unknown body type: {}", label)))?,
    };
    let fuel = match fuel_type {
        None => FuelFilter::All,
        Some(label) if label.eq_ignore_ascii_case("all") => FuelFilter::All,
        Some(label) => FuelType::parse(label)
            .map(FuelFilter::Only)
            .ok_or_else(|| ApiError::BadRequest(format!("unknown fuel type: {}", label)))?,
    };
    Ok((body, fuel))
}

/// GET /api/compare
pub async fn compare_vehicles(
    State(state): State<ApiState>,
    Query(params): Query<CompareParams>,
) -> Result<Response, ApiError> {
    let outcome = state
        .compare
        .handle(CompareVehiclesQuery {
            first: params.first,
            second: params.second,
        })
        .await?;
    Ok(Json(outcome).into_response())
}

/// GET /api/eco-search
pub async fn find_eco_friendly(
    State(state): State<ApiState>,
    Query(params): Query<EcoSearchParams>,
) -> Result<Response, ApiError> {
    let (body, fuel) = parse_filters(params.body_type.as_deref(), params.fuel_type.as_deref())?;
    let criteria = EcoCriteria {
        budget_min: params.budget_min.unwrap_or(0),
        budget_max: params.budget_max.unwrap_or(u64::MAX),
        body,
        fuel,
    };
    let outcome = state
        .eco_search
        .handle(FindEcoFriendlyQuery { criteria })
        .await?;
    Ok(Json(outcome).into_response())
}

/// GET /api/costs
pub async fn calculate_costs(
    State(state): State<ApiState>,
    Query(params): Query<CostParams>,
) -> Response {
    let result = state.costs.handle(CalculatorInputs {
        daily_km: params.daily_km,
        fuel_price: params.fuel_price,
        electricity_cost: params.electricity_cost,
        fuel_mileage: params.fuel_mileage,
    });
    Json(result).into_response()
}

/// GET /api/ev-picks
pub async fn best_ev_under_budget(
    State(state): State<ApiState>,
    Query(params): Query<EvShortlistParams>,
) -> Result<Response, ApiError> {
    let usage = params
        .usage
        .as_deref()
        .map(UsagePattern::parse)
        .unwrap_or_default();
    let outcome = state
        .ev_shortlist
        .handle(BestEvUnderBudgetQuery {
            budget: params.budget,
            usage,
        })
        .await?;
    Ok(Json(outcome).into_response())
}

/// GET /api/insights
pub async fn generate_insights(
    State(state): State<ApiState>,
    Query(params): Query<InsightParams>,
) -> Response {
    let set = state.insights.handle(GenerateInsightsQuery {
        daily_km: params.daily_km,
    });
    Json(set).into_response()
}

/// GET /api/footprint
pub async fn commute_footprint(Query(params): Query<FootprintParams>) -> Response {
    let result = footprint(
        params.daily_km.unwrap_or(constants::CALCULATOR_DEFAULT_DAILY_KM),
        params.fuel.unwrap_or(CommuteFuel::Ice),
        params.city_share_pct.unwrap_or(50.0),
    );
    Json(result).into_response()
}

/// GET /api/ownership-projection
pub async fn ownership_projection(Query(params): Query<ProjectionParams>) -> Response {
    let result = project_ownership(
        params.ice_price.unwrap_or(1_500_000),
        params.ev_price.unwrap_or(2_000_000),
        params
            .annual_km
            .unwrap_or(constants::PROJECTION_DEFAULT_ANNUAL_KM),
    );
    Json(result).into_response()
}

/// GET /api/prices/:city
pub async fn city_prices(
    State(state): State<ApiState>,
    Path(city): Path<String>,
) -> Response {
    let sheet = state.price_feed.city_prices(&city).await;
    let cars = sheet
        .cars
        .iter()
        .map(|car| {
            let on_road = on_road_breakdown(car.base_price, &sheet.city);
            PricedCarResponse {
                car: car.clone(),
                on_road,
                on_road_fmt: state.formatter.format(on_road.total as i64),
            }
        })
        .collect();

    Json(PriceSheetResponse {
        city: sheet.city.clone(),
        live_count: sheet.live_count,
        total_count: sheet.total_count,
        fetched_at: sheet.fetched_at,
        cars,
    })
    .into_response()
}
