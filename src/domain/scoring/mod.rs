//! Scoring module - lifecycle emissions to sustainability score.

mod sustainability;

pub use sustainability::{estimate_emissions, score_emissions, score_vehicle};
