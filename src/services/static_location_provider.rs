use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::{
    FixCallback, Location, LocationError, LocationProvider, PositionConfig,
    WatchConfig, WatchErrorCallback, WatchHandle,
};

/// Substitutable provider with a scripted outcome; no device involved.
/// Watch subscriptions deliver the configured fix (or error) once,
/// synchronously at registration.
pub struct StaticLocationProvider {
    outcome: Result<Location, LocationError>,
    requests: AtomicUsize,
    cleared: Mutex<HashSet<u64>>,
    next_watch_id: AtomicU64,
}

impl StaticLocationProvider {
    pub fn with_fix(latitude: f64, longitude: f64) -> Self {
        Self::new(Ok(Location::new(latitude, longitude)))
    }

    pub fn failing(error: LocationError) -> Self {
        Self::new(Err(error))
    }

    fn new(outcome: Result<Location, LocationError>) -> Self {
        Self {
            outcome,
            requests: AtomicUsize::new(0),
            cleared: Mutex::new(HashSet::new()),
            next_watch_id: AtomicU64::new(1),
        }
    }

    pub fn times_requested(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn was_cleared(&self, handle: WatchHandle) -> bool {
        self.cleared.lock().unwrap().contains(&handle.id())
    }
}

#[async_trait::async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn get_current_position(
        &self,
        _config: &PositionConfig,
    ) -> Result<Location, LocationError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.outcome
    }

    fn watch_position(
        &self,
        _config: &WatchConfig,
        on_fix: FixCallback,
        on_error: WatchErrorCallback,
    ) -> WatchHandle {
        match self.outcome {
            Ok(fix) => on_fix(fix),
            Err(e) => on_error(e),
        }
        WatchHandle(self.next_watch_id.fetch_add(1, Ordering::SeqCst))
    }

    fn clear_watch(&self, handle: WatchHandle) {
        self.cleared.lock().unwrap().insert(handle.0);
    }
}
