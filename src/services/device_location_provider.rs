use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::{
    FixCallback, Location, LocationError, LocationProvider, PositionConfig,
    WatchConfig, WatchErrorCallback, WatchHandle,
};

/// Position payload as the platform sensor delivers it, before it is
/// hidden behind the `Location` type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
}

impl RawPosition {
    fn into_location(self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            accuracy: self.accuracy,
        }
    }
}

/// Numeric error as reported by the platform sensor. Codes follow the
/// provider convention: 1 permission denied, 2 position unavailable,
/// 3 timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPositionError {
    pub code: i32,
    pub message: String,
}

/// Raw platform geolocation API. Marshaling the actual device calls
/// lives outside the core; this seam is what the production provider
/// consumes.
#[async_trait::async_trait]
pub trait GeolocationApi {
    async fn current_position(
        &self,
        enable_high_accuracy: bool,
    ) -> Result<RawPosition, RawPositionError>;

    /// Opens a stream of raw position updates configured with the watch
    /// options the platform understands.
    fn position_updates(
        &self,
        config: &WatchConfig,
    ) -> mpsc::Receiver<Result<RawPosition, RawPositionError>>;
}

pub type GeolocationApiType = Arc<dyn GeolocationApi + Send + Sync>;

/// Production provider over the device sensor. Owns the error-code
/// mapping, the maximum-age fix cache, the one-shot timeout, and the
/// per-watch distance/interval filtering.
pub struct DeviceLocationProvider {
    api: GeolocationApiType,
    cached_fix: Mutex<Option<(Location, Instant)>>,
    watches: Mutex<HashMap<u64, JoinHandle<()>>>,
    next_watch_id: AtomicU64,
}

impl DeviceLocationProvider {
    pub fn new(api: GeolocationApiType) -> Self {
        Self {
            api,
            cached_fix: Mutex::new(None),
            watches: Mutex::new(HashMap::new()),
            next_watch_id: AtomicU64::new(1),
        }
    }

    fn fresh_cached_fix(&self, config: &PositionConfig) -> Option<Location> {
        if config.maximum_age.is_zero() {
            return None;
        }
        let cached = self.cached_fix.lock().unwrap();
        cached.and_then(|(fix, obtained_at)| {
            (obtained_at.elapsed() < config.maximum_age).then_some(fix)
        })
    }
}

#[async_trait::async_trait]
impl LocationProvider for DeviceLocationProvider {
    #[tracing::instrument(name = "Requesting position fix", skip(self))]
    async fn get_current_position(
        &self,
        config: &PositionConfig,
    ) -> Result<Location, LocationError> {
        if let Some(fix) = self.fresh_cached_fix(config) {
            tracing::debug!("Reusing cached fix");
            return Ok(fix);
        }

        let request = self.api.current_position(config.enable_high_accuracy);
        match tokio::time::timeout(config.timeout, request).await {
            Err(_elapsed) => Err(LocationError::Timeout),
            Ok(Err(raw)) => {
                tracing::warn!(
                    code = raw.code,
                    "Position request failed: {}",
                    raw.message
                );
                Err(LocationError::from_code(raw.code))
            }
            Ok(Ok(raw)) => {
                let fix = raw.into_location();
                *self.cached_fix.lock().unwrap() = Some((fix, Instant::now()));
                Ok(fix)
            }
        }
    }

    fn watch_position(
        &self,
        config: &WatchConfig,
        on_fix: FixCallback,
        on_error: WatchErrorCallback,
    ) -> WatchHandle {
        let id = self.next_watch_id.fetch_add(1, Ordering::SeqCst);
        let mut updates = self.api.position_updates(config);
        let config = *config;

        let task = tokio::spawn(async move {
            let mut last_delivered: Option<(Location, Instant)> = None;
            while let Some(update) = updates.recv().await {
                match update {
                    // Stream errors are reported but never end the
                    // subscription.
                    Err(raw) => on_error(LocationError::from_code(raw.code)),
                    Ok(raw) => {
                        let fix = raw.into_location();
                        if let Some((previous, delivered_at)) = last_delivered
                        {
                            if delivered_at.elapsed() < config.min_interval {
                                continue;
                            }
                            if distance_meters(previous, fix)
                                < config.distance_filter_meters
                            {
                                continue;
                            }
                        }
                        last_delivered = Some((fix, Instant::now()));
                        on_fix(fix);
                    }
                }
            }
        });

        self.watches.lock().unwrap().insert(id, task);
        WatchHandle(id)
    }

    fn clear_watch(&self, handle: WatchHandle) {
        if let Some(task) = self.watches.lock().unwrap().remove(&handle.0) {
            task.abort();
        }
    }
}

impl Drop for DeviceLocationProvider {
    fn drop(&mut self) {
        for (_, task) in self.watches.lock().unwrap().drain() {
            task.abort();
        }
    }
}

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine great-circle distance between two fixes.
fn distance_meters(a: Location, b: Location) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}
