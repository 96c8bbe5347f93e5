//! GenerateInsightsHandler - human-readable switch-to-EV insights.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::cost::constants;
use crate::domain::recommendation::{insight_figures, random_hinglish_tip};
use crate::ports::CurrencyFormatter;

/// Query for the insight strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateInsightsQuery {
    pub daily_km: Option<f64>,
}

/// Insight payload: three fixed insight lines plus a randomly picked
/// conversational tip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSet {
    pub insights: Vec<String>,
    pub tip: String,
}

/// Handler for the insight generation operation.
pub struct GenerateInsightsHandler {
    formatter: Arc<dyn CurrencyFormatter>,
}

impl GenerateInsightsHandler {
    pub fn new(formatter: Arc<dyn CurrencyFormatter>) -> Self {
        Self { formatter }
    }

    /// Produces the three insight lines.
    ///
    /// The break-even line only appears under the ten-year cutoff;
    /// otherwise the fixed encouragement line takes its place. The tip
    /// is the engine's one random output.
    pub fn handle(&self, query: GenerateInsightsQuery) -> InsightSet {
        let figures = insight_figures(query.daily_km);

        let break_even_line = match figures.break_even_years {
            Some(years) if years < constants::BREAK_EVEN_DISPLAY_CUTOFF_YEARS => {
                format!(
                    "💡 Break-even in {:.1} years — then it's pure savings!",
                    years
                )
            }
            _ => "💡 EVs keep getting more affordable every year 🚀".to_string(),
        };

        InsightSet {
            insights: vec![
                format!(
                    "💡 Switching to an EV can reduce {:.1} tons of CO₂ in 5 years.",
                    figures.co2_avoided_5y_tons
                ),
                format!(
                    "💡 You could save {} over 5 years.",
                    self.formatter.format(figures.cost_saved_5y.round() as i64)
                ),
                break_even_line,
            ],
            tip: random_hinglish_tip().to_string(),
        }
    }
}
