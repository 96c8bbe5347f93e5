//! Switch-to-EV insight figures and tips.

use rand::seq::SliceRandom;

use crate::domain::cost::constants;

/// Numeric inputs for the insight strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightFigures {
    /// CO₂ avoided over five years by switching, in tons.
    pub co2_avoided_5y_tons: f64,
    /// Running cost saved over five years, in ₹.
    pub cost_saved_5y: f64,
    /// Years to recover the fixed EV premium; `None` when the yearly
    /// saving is not positive.
    pub break_even_years: Option<f64>,
}

/// Computes the insight figures for a daily commute distance.
///
/// A missing or non-positive distance defaults to the calculator
/// surface's 30 km assumption.
pub fn insight_figures(daily_km: Option<f64>) -> InsightFigures {
    let daily_km = match daily_km {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => constants::CALCULATOR_DEFAULT_DAILY_KM,
    };

    let ice_co2_yearly_kg =
        daily_km * constants::BASELINE_ICE_GCO2_PER_KM * constants::DAYS_PER_YEAR / 1000.0;
    let co2_avoided_5y_tons = ice_co2_yearly_kg * constants::OWNERSHIP_YEARS / 1000.0;

    let ice_cost_yearly = daily_km / constants::AVG_PETROL_MILEAGE_KM_PER_L
        * constants::AVG_PETROL_PRICE_INR_PER_L
        * constants::DAYS_PER_YEAR;
    let ev_cost_yearly = daily_km / constants::AVG_EV_EFFICIENCY_KM_PER_KWH
        * constants::AVG_ELECTRICITY_COST_INR_PER_KWH
        * constants::DAYS_PER_YEAR;
    let cost_saved_5y = (ice_cost_yearly - ev_cost_yearly) * constants::OWNERSHIP_YEARS;

    let break_even_years = if cost_saved_5y > 0.0 {
        Some(constants::EV_PRICE_PREMIUM_INR / (cost_saved_5y / constants::OWNERSHIP_YEARS))
    } else {
        None
    };

    InsightFigures {
        co2_avoided_5y_tons,
        cost_saved_5y,
        break_even_years,
    }
}

/// Conversational nudges shown by the assistant surface.
pub const HINGLISH_TIPS: &[&str] = &[
    "Petrol mehenga padta hai long term 😅 EV zyada sasta hai!",
    "Ek baar EV liya toh fuel bill bhool jaoge! ⚡",
    "Green drive = smart drive. Paisa bhi bachao, planet bhi 🌍",
    "EV mein maintenance bhi kam hota hai boss! 🔧",
    "CO₂ kam, savings zyada — what a deal! 🤑",
];

/// Picks a random tip. The only non-deterministic operation in the
/// engine.
pub fn random_hinglish_tip() -> &'static str {
    HINGLISH_TIPS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(HINGLISH_TIPS[0])
}
