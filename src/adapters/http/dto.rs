//! HTTP DTOs for the engine endpoints.
//!
//! The engine is read-only over HTTP, so requests are query-parameter
//! structs and responses re-use the application payloads directly.

use serde::{Deserialize, Serialize};

use crate::adapters::pricing::PricedCar;
use crate::domain::cost::CommuteFuel;
use crate::domain::foundation::Timestamp;
use crate::domain::pricing::OnRoadBreakdown;

/// Parameters for the comparison endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareParams {
    pub first: String,
    pub second: String,
}

/// Parameters for the eco search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EcoSearchParams {
    pub budget_min: Option<u64>,
    pub budget_max: Option<u64>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
}

/// Parameters for the cost calculator endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CostParams {
    pub daily_km: Option<f64>,
    pub fuel_price: Option<f64>,
    pub electricity_cost: Option<f64>,
    pub fuel_mileage: Option<f64>,
}

/// Parameters for the EV shortlist endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EvShortlistParams {
    pub budget: Option<u64>,
    pub usage: Option<String>,
}

/// Parameters for the insights endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InsightParams {
    pub daily_km: Option<f64>,
}

/// Parameters for the commute footprint endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FootprintParams {
    pub daily_km: Option<f64>,
    pub fuel: Option<CommuteFuel>,
    pub city_share_pct: Option<f64>,
}

/// Parameters for the ownership projection endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProjectionParams {
    pub ice_price: Option<u64>,
    pub ev_price: Option<u64>,
    pub annual_km: Option<f64>,
}

/// A price-sheet row with its localized on-road breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedCarResponse {
    #[serde(flatten)]
    pub car: PricedCar,
    pub on_road: OnRoadBreakdown,
    pub on_road_fmt: String,
}

/// City price sheet response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSheetResponse {
    pub city: String,
    pub live_count: usize,
    pub total_count: usize,
    pub fetched_at: Option<Timestamp>,
    pub cars: Vec<PricedCarResponse>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            code: "UPSTREAM_FAILURE".to_string(),
            message: message.into(),
        }
    }
}
