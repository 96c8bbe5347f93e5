//! Vehicle record store port.

use async_trait::async_trait;

use crate::domain::vehicle::VehicleRecord;

/// Bulk-read access to the external vehicle-record store.
///
/// The engine operates on the full set in memory; no pagination
/// contract is assumed.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Fetches every vehicle record.
    ///
    /// # Errors
    ///
    /// - `Upstream` when the remote read fails. The catalog propagates
    ///   this unmodified; callers decide whether to retry.
    async fn fetch_all(&self) -> Result<Vec<VehicleRecord>, VehicleStoreError>;
}

/// Errors from the vehicle record store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum VehicleStoreError {
    #[error("vehicle store fetch failed: {0}")]
    Upstream(String),
}

impl From<sqlx::Error> for VehicleStoreError {
    fn from(err: sqlx::Error) -> Self {
        VehicleStoreError::Upstream(err.to_string())
    }
}
