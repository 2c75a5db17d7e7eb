use super::{
    Location, LocationError, PositionConfig, Shift, WatchConfig, WatchHandle,
};
use color_eyre::eyre::Report;
use thiserror::Error;

/// Obtains authorization to read the device location.
///
/// A user decline is a normal `false` result, not an error; an internal
/// failure of the permission subsystem is caught and also reported as
/// `false` after logging a diagnostic. Implementations never panic or
/// propagate an error to callers.
#[async_trait::async_trait]
pub trait PermissionGateway {
    async fn request_location_permission(&self) -> bool;
}

/// Callback invoked with each new fix on a watch subscription.
pub type FixCallback = Box<dyn Fn(Location) + Send + Sync>;
/// Callback invoked with stream errors; errors do not terminate the
/// subscription.
pub type WatchErrorCallback = Box<dyn Fn(LocationError) + Send + Sync>;

/// Wraps the device position sensor behind the `Location` type and the
/// four-valued `LocationError` taxonomy. The only component in the core
/// that talks to a sensor.
#[async_trait::async_trait]
pub trait LocationProvider {
    /// One-shot fix. Resolves with a `Location` or fails with a typed
    /// error; a cached fix younger than `config.maximum_age` may be
    /// reused.
    async fn get_current_position(
        &self,
        config: &PositionConfig,
    ) -> Result<Location, LocationError>;

    /// Registers a continuous stream of fixes passing the config's
    /// distance/interval thresholds. Does not suspend.
    fn watch_position(
        &self,
        config: &WatchConfig,
        on_fix: FixCallback,
        on_error: WatchErrorCallback,
    ) -> WatchHandle;

    /// Releases a subscription. Idempotent: unknown or already-cleared
    /// handles are a no-op.
    fn clear_watch(&self, handle: WatchHandle);
}

/// One page of shifts as returned by the data source, under the API's
/// `data` envelope with an HTTP-style status.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ShiftsPage {
    pub data: Vec<Shift>,
    #[serde(default = "default_status")]
    pub status: u16,
}

fn default_status() -> u16 {
    200
}

/// Fetches the shifts visible from a pair of coordinates. Swappable
/// between the live network-backed implementation and a static data
/// source; the orchestrator treats failures from either identically.
/// No retry logic lives here — retries are a workflow decision.
#[async_trait::async_trait]
pub trait ShiftRepository {
    async fn get_shifts_by_location(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ShiftsPage, RepositoryError>;
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Network error")]
    Network(#[source] Report),
}

impl PartialEq for RepositoryError {
    fn eq(&self, other: &Self) -> bool {
        matches!((self, other), (Self::Network(_), Self::Network(_)))
    }
}
