//! In-memory vehicle catalog with TTL and single-flight refresh.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::domain::vehicle::{propagate_family_images, NormalizedVehicle};
use crate::ports::{CatalogError, CatalogSnapshot, PriceLookup, VehicleCatalog, VehicleStore};

/// Snapshot time-to-live: ten minutes.
const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Caching catalog over a vehicle store and a price-lookup collaborator.
///
/// Reads serve the current snapshot until it ages past the TTL. The
/// refresh section is guarded by a mutex: callers that arrive while a
/// refresh is in flight queue on the lock and re-check the snapshot
/// after acquiring it, so a burst of stale reads results in exactly one
/// store fetch and every caller observes the same new snapshot.
pub struct CachedVehicleCatalog {
    store: Arc<dyn VehicleStore>,
    prices: Arc<dyn PriceLookup>,
    ttl: Duration,
    snapshot: RwLock<Option<(Instant, CatalogSnapshot)>>,
    refresh_lock: Mutex<()>,
}

impl CachedVehicleCatalog {
    /// Creates a catalog with the default ten-minute TTL.
    pub fn new(store: Arc<dyn VehicleStore>, prices: Arc<dyn PriceLookup>) -> Self {
        Self::with_ttl(store, prices, DEFAULT_TTL)
    }

    /// Creates a catalog with a custom TTL.
    pub fn with_ttl(
        store: Arc<dyn VehicleStore>,
        prices: Arc<dyn PriceLookup>,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            prices,
            ttl,
            snapshot: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    async fn fresh_snapshot(&self) -> Option<CatalogSnapshot> {
        let guard = self.snapshot.read().await;
        guard.as_ref().and_then(|(taken_at, snapshot)| {
            if taken_at.elapsed() < self.ttl {
                Some(snapshot.clone())
            } else {
                None
            }
        })
    }

    /// Fetches and normalizes the full record set.
    ///
    /// Callers must hold `refresh_lock`.
    async fn refresh_locked(&self) -> Result<CatalogSnapshot, CatalogError> {
        let records = self.store.fetch_all().await.map_err(|err| {
            warn!(error = %err, "catalog refresh failed");
            err
        })?;

        let mut vehicles = Vec::with_capacity(records.len());
        for record in records {
            let looked_up = if record.ex_showroom_price_inr.is_none() {
                self.prices.lookup_base_price(&record.name).await
            } else {
                None
            };
            vehicles.push(NormalizedVehicle::from_record(record, looked_up));
        }
        propagate_family_images(&mut vehicles);

        let snapshot = CatalogSnapshot::new(vehicles);
        info!(
            vehicles = snapshot.vehicles.len(),
            "catalog refreshed"
        );

        let mut guard = self.snapshot.write().await;
        *guard = Some((Instant::now(), snapshot.clone()));
        Ok(snapshot)
    }
}

#[async_trait]
impl VehicleCatalog for CachedVehicleCatalog {
    async fn get_all(&self) -> Result<CatalogSnapshot, CatalogError> {
        if let Some(snapshot) = self.fresh_snapshot().await {
            debug!("catalog cache hit");
            return Ok(snapshot);
        }

        let _guard = self.refresh_lock.lock().await;
        // Another caller may have finished the refresh while this one
        // waited on the lock.
        if let Some(snapshot) = self.fresh_snapshot().await {
            debug!("catalog refreshed by concurrent caller");
            return Ok(snapshot);
        }
        self.refresh_locked().await
    }

    async fn refresh(&self) -> Result<CatalogSnapshot, CatalogError> {
        let _guard = self.refresh_lock.lock().await;
        self.refresh_locked().await
    }

    async fn invalidate(&self) {
        let mut guard = self.snapshot.write().await;
        *guard = None;
        debug!("catalog invalidated");
    }
}
