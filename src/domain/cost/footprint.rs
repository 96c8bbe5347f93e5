//! Commute carbon footprint estimation.
//!
//! Estimates yearly commute CO₂ from a per-fuel base factor adjusted by
//! the share of city driving: stop-and-go traffic raises combustion
//! emissions while regenerative braking lowers electrified ones.

use serde::{Deserialize, Serialize};

use super::constants;

/// Drivetrain category for the footprint estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommuteFuel {
    Ev,
    Hybrid,
    Ice,
}

impl CommuteFuel {
    fn base_factor(&self) -> f64 {
        match self {
            CommuteFuel::Ev => constants::FOOTPRINT_EV_GCO2_PER_KM,
            CommuteFuel::Hybrid => constants::FOOTPRINT_HYBRID_GCO2_PER_KM,
            CommuteFuel::Ice => constants::FOOTPRINT_ICE_GCO2_PER_KM,
        }
    }

    fn adjusted_factor(&self, city_share_pct: f64) -> f64 {
        let share = city_share_pct.clamp(0.0, 100.0) / 100.0;
        match self {
            CommuteFuel::Ev | CommuteFuel::Hybrid => self.base_factor() * (1.0 - share * 0.2),
            CommuteFuel::Ice => self.base_factor() * (1.0 + share * 0.3),
        }
    }
}

/// Yearly commute footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuteFootprint {
    pub yearly_co2_kg: i64,
    /// Trees needed to offset a year of commuting.
    pub trees_to_offset: i64,
    /// CO₂ avoided versus an ICE commute with the same city share.
    pub co2_saved_kg: i64,
}

/// Computes the yearly footprint of a daily commute.
pub fn commute_footprint(
    daily_km: f64,
    fuel: CommuteFuel,
    city_share_pct: f64,
) -> CommuteFootprint {
    let factor = fuel.adjusted_factor(city_share_pct);
    let yearly_co2_kg = daily_km * factor * constants::DAYS_PER_YEAR / 1000.0;

    let ice_factor = CommuteFuel::Ice.adjusted_factor(city_share_pct);
    let ice_yearly_kg = daily_km * ice_factor * constants::DAYS_PER_YEAR / 1000.0;
    let saved = match fuel {
        CommuteFuel::Ice => 0.0,
        _ => ice_yearly_kg - yearly_co2_kg,
    };

    CommuteFootprint {
        yearly_co2_kg: yearly_co2_kg.round() as i64,
        trees_to_offset: (yearly_co2_kg / constants::KG_CO2_OFFSET_PER_TREE_YEAR).ceil() as i64,
        co2_saved_kg: saved.round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ev_commute_emits_nothing() {
        let footprint = commute_footprint(30.0, CommuteFuel::Ev, 50.0);
        assert_eq!(footprint.yearly_co2_kg, 0);
        assert_eq!(footprint.trees_to_offset, 0);
    }

    #[test]
    fn ice_commute_at_half_city_share() {
        // 160 * 1.15 = 184 g/km; 30 km * 184 * 365 / 1000 = 2014.8 kg
        let footprint = commute_footprint(30.0, CommuteFuel::Ice, 50.0);
        assert_eq!(footprint.yearly_co2_kg, 2_015);
        // 2014.8 / 21 = 95.94 -> 96 trees
        assert_eq!(footprint.trees_to_offset, 96);
        assert_eq!(footprint.co2_saved_kg, 0);
    }

    #[test]
    fn hybrid_city_driving_lowers_the_factor() {
        // 95 * (1 - 0.2) = 76 g/km at full city share.
        let footprint = commute_footprint(30.0, CommuteFuel::Hybrid, 100.0);
        let expected = (30.0 * 76.0 * 365.0 / 1000.0_f64).round() as i64;
        assert_eq!(footprint.yearly_co2_kg, expected);
    }

    #[test]
    fn savings_compare_against_adjusted_ice_baseline() {
        let footprint = commute_footprint(30.0, CommuteFuel::Ev, 0.0);
        // Pure highway: ICE factor stays 160 g/km.
        let ice_yearly = (30.0 * 160.0 * 365.0 / 1000.0_f64).round() as i64;
        assert_eq!(footprint.co2_saved_kg, ice_yearly);
    }

    #[test]
    fn ice_commute_saves_nothing_by_definition() {
        let footprint = commute_footprint(80.0, CommuteFuel::Ice, 100.0);
        assert_eq!(footprint.co2_saved_kg, 0);
    }

    #[test]
    fn city_share_is_clamped() {
        let over = commute_footprint(30.0, CommuteFuel::Ice, 250.0);
        let capped = commute_footprint(30.0, CommuteFuel::Ice, 100.0);
        assert_eq!(over, capped);
    }
}
