use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::domain::{LoadError, Location, LookupError, Shift, ShiftId};

/// Names the store field a notification is about. Setters fire exactly
/// one event each; a multi-field orchestration step is observed as
/// separate events in setter-call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Shifts,
    CurrentLocation,
    Loading,
    Error,
    Cleared,
}

/// Identifies a registered subscriber for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn Fn(StoreEvent) + Send + Sync>;

#[derive(Debug, Clone, Default, PartialEq)]
struct StoreState {
    shifts: Vec<Shift>,
    current_location: Option<Location>,
    loading: bool,
    error: Option<LoadError>,
}

/// Observable container for the latest fetch result and load state.
///
/// Created once per application session and shared via `Arc`; the
/// orchestrator is the only writer of the load-state fields, consumers
/// read and subscribe. Every setter is a single atomic field replacement
/// and notifies all subscribers synchronously before it returns, so a
/// consumer re-render sees the new value without a scheduling
/// round-trip.
///
/// Subscriber callbacks may read the store but must not subscribe or
/// unsubscribe from within a notification.
#[derive(Default)]
pub struct ShiftStore {
    state: Mutex<StoreState>,
    subscribers: Mutex<Vec<(SubscriberId, Subscriber)>>,
    next_subscriber_id: AtomicU64,
}

impl ShiftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shifts(&self) -> Vec<Shift> {
        self.state.lock().unwrap().shifts.clone()
    }

    pub fn shift_count(&self) -> usize {
        self.state.lock().unwrap().shifts.len()
    }

    pub fn current_location(&self) -> Option<Location> {
        self.state.lock().unwrap().current_location
    }

    pub fn loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    pub fn error(&self) -> Option<LoadError> {
        self.state.lock().unwrap().error
    }

    /// Linear lookup over the current collection. List sizes are small;
    /// an index would be an optimization, not a correctness requirement.
    pub fn get_shift_by_id(&self, id: &ShiftId) -> Option<Shift> {
        self.state
            .lock()
            .unwrap()
            .shifts
            .iter()
            .find(|shift| &shift.id == id)
            .cloned()
    }

    /// Lookup for the detail flow: an absent id is a typed error rather
    /// than a panic.
    pub fn require_shift(&self, id: &ShiftId) -> Result<Shift, LookupError> {
        self.get_shift_by_id(id)
            .ok_or_else(|| LookupError::ShiftNotFound(id.clone()))
    }

    pub fn set_shifts(&self, shifts: Vec<Shift>) {
        self.state.lock().unwrap().shifts = shifts;
        self.notify(StoreEvent::Shifts);
    }

    pub fn set_current_location(&self, location: Location) {
        self.state.lock().unwrap().current_location = Some(location);
        self.notify(StoreEvent::CurrentLocation);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.lock().unwrap().loading = loading;
        self.notify(StoreEvent::Loading);
    }

    pub fn set_error(&self, error: Option<LoadError>) {
        self.state.lock().unwrap().error = error;
        self.notify(StoreEvent::Error);
    }

    /// Resets all fields to their initial values (e.g. on logout or
    /// session change). Idempotent.
    pub fn clear_data(&self) {
        *self.state.lock().unwrap() = StoreState::default();
        self.notify(StoreEvent::Cleared);
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(StoreEvent) + Send + Sync + 'static,
    {
        let id = SubscriberId(
            self.next_subscriber_id.fetch_add(1, Ordering::Relaxed),
        );
        self.subscribers
            .lock()
            .unwrap()
            .push((id, Box::new(callback)));
        id
    }

    /// Removing an unknown or already-removed subscriber is a no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers
            .lock()
            .unwrap()
            .retain(|(subscriber_id, _)| *subscriber_id != id);
    }

    fn notify(&self, event: StoreEvent) {
        // The state lock is already released here, so callbacks are free
        // to read the store.
        let subscribers = self.subscribers.lock().unwrap();
        for (_, callback) in subscribers.iter() {
            callback(event);
        }
    }
}
