//! Normalized vehicle - the read-only catalog entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SustainabilityScore;
use crate::domain::scoring;

use super::{BodySegment, FuelType, VehicleRecord};

/// A vehicle record after normalization.
///
/// Constructed once per catalog refresh and never mutated within a
/// cache window; a refresh fully replaces the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedVehicle {
    pub manufacturer: String,
    pub name: String,
    pub year: i32,
    pub category: String,
    /// Display name, e.g. "Tata Nexon EV (2024)".
    pub display_name: String,
    pub fuel_type: FuelType,
    pub body_segment: BodySegment,
    /// Resolved ex-showroom price in ₹: the record's own price, else the
    /// price-lookup collaborator's answer, else unknown.
    pub base_price: Option<u64>,
    pub lifecycle_gco2_km: Option<f64>,
    pub battery_capacity_kwh: Option<f64>,
    pub range_km: Option<f64>,
    pub fuel_economy_mpg: Option<f64>,
    pub efficiency_km_per_kwh: Option<f64>,
    pub maintenance_yearly_inr: Option<u64>,
    pub image: Option<String>,
    pub sustainability_score: SustainabilityScore,
}

impl NormalizedVehicle {
    /// Derives a normalized vehicle from a raw record.
    ///
    /// `looked_up_price` is the price-lookup collaborator's answer,
    /// consulted only when the record carries no price of its own.
    pub fn from_record(record: VehicleRecord, looked_up_price: Option<u64>) -> Self {
        let fuel_type = FuelType::infer(&record.category);
        let body_segment = BodySegment::infer(&record.manufacturer, &record.name);
        let display_name = format!("{} {} ({})", record.manufacturer, record.name, record.year);
        let base_price = record.ex_showroom_price_inr.or(looked_up_price);
        let sustainability_score = scoring::score_vehicle(
            fuel_type,
            record.lifecycle_gco2_km,
            record.epa_g_per_mile,
            record.co2_per_100km,
        );

        Self {
            display_name,
            fuel_type,
            body_segment,
            base_price,
            sustainability_score,
            manufacturer: record.manufacturer,
            name: record.name,
            year: record.year,
            category: record.category,
            lifecycle_gco2_km: record.lifecycle_gco2_km,
            battery_capacity_kwh: record.battery_capacity_kwh,
            range_km: record.range_km,
            fuel_economy_mpg: record.fuel_economy_mpg,
            efficiency_km_per_kwh: record.efficiency_km_per_kwh,
            maintenance_yearly_inr: record.maintenance_yearly_inr,
            image: record.image,
        }
    }

    /// Model-family grouping key for image sharing.
    ///
    /// Lowercased manufacturer joined with the first token of the model
    /// name (manufacturer prefix stripped when the name repeats it), so
    /// "Hyundai Creta 1.5 D MT" and "Hyundai Creta 1.5 P MT" land in the
    /// same family.
    pub fn model_family_key(&self) -> String {
        let mfr = self.manufacturer.to_lowercase().trim().to_string();
        let nm = self.name.to_lowercase().trim().to_string();
        let rest = match nm.strip_prefix(mfr.as_str()) {
            Some(stripped) => stripped.trim().to_string(),
            None => nm,
        };
        let model = rest.split_whitespace().next().unwrap_or(&rest).to_string();
        format!("{}::{}", mfr, model)
    }
}

/// Shares images across trims/variants of the same model family.
///
/// For each family, the first image encountered in iteration order is
/// propagated to every member lacking one. Members of families with no
/// imaged sibling keep `image = None`.
pub fn propagate_family_images(vehicles: &mut [NormalizedVehicle]) {
    use std::collections::HashMap;

    let mut family_image: HashMap<String, String> = HashMap::new();
    for vehicle in vehicles.iter() {
        if let Some(image) = &vehicle.image {
            family_image
                .entry(vehicle.model_family_key())
                .or_insert_with(|| image.clone());
        }
    }

    for vehicle in vehicles.iter_mut() {
        if vehicle.image.is_none() {
            if let Some(image) = family_image.get(&vehicle.model_family_key()) {
                vehicle.image = Some(image.clone());
            }
        }
    }
}
