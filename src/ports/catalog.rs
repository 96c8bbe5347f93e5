//! Vehicle catalog port.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::vehicle::NormalizedVehicle;

use super::VehicleStoreError;

/// An immutable catalog snapshot.
///
/// The vehicle set is shared, never mutated in place; a refresh
/// produces a whole new snapshot.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub vehicles: Arc<Vec<NormalizedVehicle>>,
    pub fetched_at: Timestamp,
}

impl CatalogSnapshot {
    pub fn new(vehicles: Vec<NormalizedVehicle>) -> Self {
        Self {
            vehicles: Arc::new(vehicles),
            fetched_at: Timestamp::now(),
        }
    }
}

/// Cached access to the normalized vehicle set.
///
/// One instance is constructed per process and passed by reference to
/// every consumer; there is no hidden module-level cache state.
#[async_trait]
pub trait VehicleCatalog: Send + Sync {
    /// Returns the current snapshot, refreshing it when stale.
    ///
    /// Concurrent callers during an in-flight refresh await the same
    /// operation (single-flight); none of them trigger a second fetch.
    ///
    /// # Errors
    ///
    /// - `Upstream` when the backing store read fails. The failure is
    ///   propagated as-is; stale data is never served silently in its
    ///   place.
    async fn get_all(&self) -> Result<CatalogSnapshot, CatalogError>;

    /// Forces a refresh regardless of snapshot age.
    async fn refresh(&self) -> Result<CatalogSnapshot, CatalogError>;

    /// Drops the current snapshot; the next read fetches anew.
    async fn invalidate(&self);
}

/// Errors from catalog reads.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Upstream(#[from] VehicleStoreError),
}
