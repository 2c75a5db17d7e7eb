use thiserror::Error;

use super::ShiftId;

/// Typed failure of a position request, mapped from the numeric error
/// codes of the underlying geolocation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Position unavailable")]
    PositionUnavailable,
    #[error("Timed out waiting for a position fix")]
    Timeout,
    #[error("Unknown location error")]
    Unknown,
}

impl LocationError {
    /// Provider error codes: 1 permission denied, 2 position unavailable,
    /// 3 timeout; anything else is unknown.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unknown,
        }
    }
}

/// The error kinds a load attempt can leave in the store. Recoverable by
/// a user-initiated refresh, never fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error("Failed to load shifts")]
    Network,
}

/// Failure of a detail-screen lookup against the current store contents.
/// Not retried: the list may simply be stale, and a fresh list load is
/// the recovery path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Shift not found: {0}")]
    ShiftNotFound(ShiftId),
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
