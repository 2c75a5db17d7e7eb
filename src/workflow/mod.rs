use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::app_state::AppState;
use crate::domain::{LoadError, Location, LocationError, PositionConfig};
use crate::utils::tracing::log_error_chain;

/// Where a workflow attempt ended up. A denied permission or a failed
/// phase is terminal for that attempt; `refresh` re-enters the fetch
/// phase with the last known location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Shifts fetched and published to the store.
    Ready,
    /// The user declined. The pipeline stops before the location phase
    /// and writes nothing to the store; surfacing a message is the
    /// caller's job.
    PermissionDenied,
    LocationFailed(LocationError),
    FetchFailed,
    /// `refresh` was invoked before any successful position fix.
    NoLocation,
    /// A newer attempt (or shutdown) took over; this attempt wrote
    /// nothing past the point it was superseded.
    Superseded,
}

/// Sequences permission -> location -> fetch and writes the outcomes
/// into the store. The orchestrator is the only writer of the store's
/// load-state fields.
///
/// Every attempt is tagged with a monotonically increasing counter;
/// starting a new attempt supersedes the previous one, and a superseded
/// attempt performs no further store writes. This keeps concurrent
/// refreshes from letting a stale response overwrite a newer one, and
/// `shutdown` uses the same mechanism to suppress writes after the
/// consuming screen is torn down.
pub struct WorkflowOrchestrator {
    state: AppState,
    position_config: PositionConfig,
    attempt: AtomicU64,
    closed: AtomicBool,
}

impl WorkflowOrchestrator {
    pub fn new(state: AppState) -> Self {
        Self::with_position_config(state, PositionConfig::default())
    }

    pub fn with_position_config(
        state: AppState,
        position_config: PositionConfig,
    ) -> Self {
        Self {
            state,
            position_config,
            attempt: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        }
    }

    /// Full pipeline: request permission, acquire a fix, fetch shifts.
    #[tracing::instrument(name = "Shift discovery workflow", skip(self))]
    pub async fn run(&self) -> RunOutcome {
        let attempt = self.begin_attempt();

        let granted = self
            .state
            .permission_gateway
            .request_location_permission()
            .await;
        if !self.is_current(attempt) {
            return RunOutcome::Superseded;
        }
        if !granted {
            // A denial is not a data error; the store stays untouched.
            tracing::info!("Location permission denied");
            return RunOutcome::PermissionDenied;
        }

        let location = match self
            .state
            .location_provider
            .get_current_position(&self.position_config)
            .await
        {
            Ok(location) => location,
            Err(kind) => {
                if !self.is_current(attempt) {
                    return RunOutcome::Superseded;
                }
                tracing::warn!("Position fix failed: {kind}");
                self.state
                    .shift_store
                    .set_error(Some(LoadError::Location(kind)));
                return RunOutcome::LocationFailed(kind);
            }
        };
        if !self.is_current(attempt) {
            return RunOutcome::Superseded;
        }
        self.state.shift_store.set_current_location(location);

        self.fetch(attempt, location).await
    }

    /// Re-enters the fetch phase with the last known location. Never
    /// re-requests permission or re-acquires a fix; a no-op when no fix
    /// exists yet.
    #[tracing::instrument(name = "Refreshing shifts", skip(self))]
    pub async fn refresh(&self) -> RunOutcome {
        let Some(location) = self.state.shift_store.current_location() else {
            return RunOutcome::NoLocation;
        };
        let attempt = self.begin_attempt();
        self.fetch(attempt, location).await
    }

    /// Supersedes every in-flight attempt so nothing writes to the store
    /// after the consuming screen is gone.
    pub fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    async fn fetch(&self, attempt: u64, location: Location) -> RunOutcome {
        if !self.is_current(attempt) {
            return RunOutcome::Superseded;
        }
        let store = &self.state.shift_store;
        store.set_loading(true);
        store.set_error(None);

        let result = self
            .state
            .shift_repository
            .get_shifts_by_location(location.latitude, location.longitude)
            .await;
        if !self.is_current(attempt) {
            return RunOutcome::Superseded;
        }

        match result {
            Ok(page) => {
                tracing::debug!(
                    count = page.data.len(),
                    status = page.status,
                    "Shifts loaded"
                );
                store.set_shifts(page.data);
                store.set_loading(false);
                RunOutcome::Ready
            }
            Err(e) => {
                log_error_chain(&e);
                // Stale shifts stay visible; a failed refresh must not
                // blank an already-populated list.
                store.set_error(Some(LoadError::Network));
                store.set_loading(false);
                RunOutcome::FetchFailed
            }
        }
    }

    fn begin_attempt(&self) -> u64 {
        self.attempt.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, attempt: u64) -> bool {
        !self.closed.load(Ordering::SeqCst)
            && self.attempt.load(Ordering::SeqCst) == attempt
    }
}
