//! Named constants for the cost and pricing surfaces.
//!
//! Three product surfaces state their own usage assumptions. The
//! projector, the interactive cost calculator, and the ownership
//! projection each document independent defaults; they are kept as
//! separate constants and must not be unified.

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const OWNERSHIP_YEARS: f64 = 5.0;

// ── Projector averages (India-wide figures) ─────────────────────────

/// ₹/litre.
pub const AVG_PETROL_PRICE_INR_PER_L: f64 = 104.0;
/// ₹/litre.
pub const AVG_DIESEL_PRICE_INR_PER_L: f64 = 90.0;
/// ₹/kWh.
pub const AVG_ELECTRICITY_COST_INR_PER_KWH: f64 = 8.0;
/// km/litre, average ICE.
pub const AVG_PETROL_MILEAGE_KM_PER_L: f64 = 15.0;
/// km/kWh, average EV.
pub const AVG_EV_EFFICIENCY_KM_PER_KWH: f64 = 7.0;
/// gCO₂/km assumed for a vehicle with no emission data.
pub const BASELINE_ICE_GCO2_PER_KM: f64 = 160.0;
/// ₹/year assumed when maintenance cost is unrecorded.
pub const DEFAULT_MAINTENANCE_INR_PER_YEAR: u64 = 15_000;
/// MPG to km/litre.
pub const MPG_TO_KM_PER_L: f64 = 0.425144;

// ── Interactive cost calculator defaults ────────────────────────────
// The calculator surface states its own assumptions, applied when an
// input is missing or non-positive.

pub const CALCULATOR_DEFAULT_DAILY_KM: f64 = 30.0;
pub const CALCULATOR_DEFAULT_FUEL_PRICE_INR_PER_L: f64 = 104.0;
pub const CALCULATOR_DEFAULT_ELECTRICITY_INR_PER_KWH: f64 = 8.0;
pub const CALCULATOR_DEFAULT_MILEAGE_KM_PER_L: f64 = 15.0;
/// Fixed EV price premium assumed by the break-even estimate.
pub const EV_PRICE_PREMIUM_INR: f64 = 500_000.0;

// ── Ownership projection defaults (savings chart surface) ───────────

pub const PROJECTION_PETROL_PRICE_INR_PER_L: f64 = 103.0;
pub const PROJECTION_ICE_MILEAGE_KM_PER_L: f64 = 14.0;
pub const PROJECTION_ICE_MAINTENANCE_INR: f64 = 12_000.0;
pub const PROJECTION_ICE_INSURANCE_INR: f64 = 35_000.0;
pub const PROJECTION_EV_EFFICIENCY_KM_PER_KWH: f64 = 7.0;
pub const PROJECTION_ELECTRICITY_INR_PER_KWH: f64 = 9.0;
pub const PROJECTION_EV_MAINTENANCE_INR: f64 = 5_000.0;
pub const PROJECTION_EV_INSURANCE_INR: f64 = 40_000.0;
pub const PROJECTION_DEFAULT_ANNUAL_KM: f64 = 15_000.0;

/// Assumed home charger draw in kW, for charging-time estimates.
pub const HOME_CHARGER_KW: f64 = 7.2;

// ── Commute footprint factors ───────────────────────────────────────

pub const FOOTPRINT_EV_GCO2_PER_KM: f64 = 0.0;
pub const FOOTPRINT_HYBRID_GCO2_PER_KM: f64 = 95.0;
pub const FOOTPRINT_ICE_GCO2_PER_KM: f64 = 160.0;
/// kg CO₂ one tree offsets per year.
pub const KG_CO2_OFFSET_PER_TREE_YEAR: f64 = 21.0;

// ── Insights ────────────────────────────────────────────────────────

/// Break-even messages are only surfaced under this many years.
pub const BREAK_EVEN_DISPLAY_CUTOFF_YEARS: f64 = 10.0;
