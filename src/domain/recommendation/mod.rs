//! Recommendation module - filtering, ranking, and decision payloads.

mod comparison;
mod eco_search;
mod ev_shortlist;
mod insights;

pub use comparison::{
    recommendation_line, resolve_query, ComparisonOutcome, VehicleProfile,
};
pub use eco_search::{
    rank_eco_friendly, ranking_emissions, BodyFilter, EcoAlternative, EcoCriteria,
    EcoPick, EcoSearchOutcome, FuelFilter,
};
pub use ev_shortlist::{
    shortlist_evs, EvPick, EvShortlistOutcome, UsagePattern, SHORTLIST_SIZE,
};
pub use insights::{insight_figures, random_hinglish_tip, InsightFigures, HINGLISH_TIPS};
