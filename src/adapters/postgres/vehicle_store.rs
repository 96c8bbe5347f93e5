//! PostgreSQL implementation of the VehicleStore port.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::vehicle::VehicleRecord;
use crate::ports::{VehicleStore, VehicleStoreError};

/// Vehicle-record store backed by the hosted Postgres table.
pub struct PostgresVehicleStore {
    pool: PgPool,
}

impl PostgresVehicleStore {
    /// Creates a store with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape of the vehicle detail table. Numeric columns are nullable
/// at the source; parsing into the domain record keeps them optional.
#[derive(Debug, sqlx::FromRow)]
struct VehicleRow {
    manufacturer: String,
    name: String,
    year: i32,
    category: Option<String>,
    lifecycle_gco2_km: Option<f64>,
    epa_g_per_mile: Option<f64>,
    co2_per_100km: Option<f64>,
    battery_capacity_kwh: Option<f64>,
    range_km: Option<f64>,
    avg_fuel_economy_mpg: Option<f64>,
    efficiency_km_per_kwh: Option<f64>,
    est_yearly_maintenance_inr: Option<i64>,
    ex_showroom_price_inr: Option<i64>,
    image_url: Option<String>,
}

fn non_negative(value: Option<i64>) -> Option<u64> {
    value.and_then(|v| u64::try_from(v).ok())
}

impl From<VehicleRow> for VehicleRecord {
    fn from(row: VehicleRow) -> Self {
        VehicleRecord {
            manufacturer: row.manufacturer,
            name: row.name,
            year: row.year,
            category: row.category.unwrap_or_default(),
            lifecycle_gco2_km: row.lifecycle_gco2_km,
            epa_g_per_mile: row.epa_g_per_mile,
            co2_per_100km: row.co2_per_100km,
            battery_capacity_kwh: row.battery_capacity_kwh,
            range_km: row.range_km,
            fuel_economy_mpg: row.avg_fuel_economy_mpg,
            efficiency_km_per_kwh: row.efficiency_km_per_kwh,
            maintenance_yearly_inr: non_negative(row.est_yearly_maintenance_inr),
            ex_showroom_price_inr: non_negative(row.ex_showroom_price_inr),
            image: row.image_url,
        }
    }
}

#[async_trait]
impl VehicleStore for PostgresVehicleStore {
    async fn fetch_all(&self) -> Result<Vec<VehicleRecord>, VehicleStoreError> {
        let rows: Vec<VehicleRow> = sqlx::query_as(
            r#"
            SELECT
                manufacturer,
                name,
                year,
                category,
                lifecycle_gco2_km,
                epa_g_per_mile,
                co2_per_100km,
                battery_capacity_kwh,
                range_km,
                avg_fuel_economy_mpg,
                efficiency_km_per_kwh,
                est_yearly_maintenance_inr,
                ex_showroom_price_inr,
                image_url
            FROM vehicle_details
            ORDER BY manufacturer ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), "vehicle rows fetched");
        Ok(rows.into_iter().map(VehicleRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> VehicleRow {
        VehicleRow {
            manufacturer: "Tata".to_string(),
            name: "Nexon EV".to_string(),
            year: 2024,
            category: None,
            lifecycle_gco2_km: Some(90.0),
            epa_g_per_mile: None,
            co2_per_100km: None,
            battery_capacity_kwh: Some(40.5),
            range_km: Some(465.0),
            avg_fuel_economy_mpg: None,
            efficiency_km_per_kwh: Some(6.8),
            est_yearly_maintenance_inr: Some(8_000),
            ex_showroom_price_inr: Some(1_479_000),
            image_url: None,
        }
    }

    #[test]
    fn row_maps_onto_the_domain_record() {
        let record: VehicleRecord = row().into();
        assert_eq!(record.manufacturer, "Tata");
        assert_eq!(record.ex_showroom_price_inr, Some(1_479_000));
        assert_eq!(record.maintenance_yearly_inr, Some(8_000));
    }

    #[test]
    fn missing_category_becomes_empty_string() {
        let record: VehicleRecord = row().into();
        assert_eq!(record.category, "");
    }

    #[test]
    fn negative_money_columns_are_dropped() {
        let mut bad = row();
        bad.ex_showroom_price_inr = Some(-1);
        bad.est_yearly_maintenance_inr = Some(-500);
        let record: VehicleRecord = bad.into();
        assert_eq!(record.ex_showroom_price_inr, None);
        assert_eq!(record.maintenance_yearly_inr, None);
    }
}
