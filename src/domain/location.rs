use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single resolved geographic position reading ("fix").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Precision in meters as reported by the device, when available.
    pub accuracy: Option<f64>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
        }
    }

    pub fn with_accuracy(latitude: f64, longitude: f64, accuracy: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: Some(accuracy),
        }
    }
}

/// Options for a one-shot position request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionConfig {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// A cached fix younger than this is reused instead of querying the
    /// device again.
    pub maximum_age: Duration,
}

impl Default for PositionConfig {
    fn default() -> Self {
        crate::utils::constants::geo::POSITION_CONFIG
    }
}

/// Options for a continuous position subscription.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchConfig {
    /// A fix closer than this to the previously delivered one is dropped.
    pub distance_filter_meters: f64,
    pub min_interval: Duration,
    pub fastest_interval: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        crate::utils::constants::geo::WATCH_CONFIG
    }
}

/// Handle for an active `watch_position` subscription. Passing it to
/// `clear_watch` releases the subscription; clearing an unknown or
/// already-cleared handle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchHandle(pub(crate) u64);

impl WatchHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}
