use std::sync::{Arc, Mutex};

use shift_finder::services::{
    StaticLocationProvider, StaticPermissionGateway, StaticShiftRepository,
};
use shift_finder::store::{ShiftStore, StoreEvent};
use shift_finder::{AppState, WorkflowOrchestrator};
use test_context::AsyncTestContext;

pub const TEST_LATITUDE: f64 = 45.103;
pub const TEST_LONGITUDE: f64 = 38.916;

/// Workflow under test with every collaborator substituted and
/// observable: call counters on the gateway and provider, a scriptable
/// repository, and a log of store notifications.
pub struct TestApp {
    pub store: Arc<ShiftStore>,
    pub permission_gateway: Arc<StaticPermissionGateway>,
    pub location_provider: Arc<StaticLocationProvider>,
    pub shift_repository: Arc<StaticShiftRepository>,
    pub orchestrator: WorkflowOrchestrator,
    pub events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_collaborators(
            StaticPermissionGateway::granting(),
            StaticLocationProvider::with_fix(TEST_LATITUDE, TEST_LONGITUDE),
            StaticShiftRepository::new(),
        )
    }

    pub fn with_collaborators(
        permission_gateway: StaticPermissionGateway,
        location_provider: StaticLocationProvider,
        shift_repository: StaticShiftRepository,
    ) -> Self {
        let store = Arc::new(ShiftStore::new());
        let permission_gateway = Arc::new(permission_gateway);
        let location_provider = Arc::new(location_provider);
        let shift_repository = Arc::new(shift_repository);

        let events = Arc::new(Mutex::new(Vec::new()));
        let event_sink = events.clone();
        store.subscribe(move |event| {
            event_sink.lock().unwrap().push(event);
        });

        let orchestrator = WorkflowOrchestrator::new(AppState::new(
            permission_gateway.clone(),
            location_provider.clone(),
            shift_repository.clone(),
            store.clone(),
        ));

        Self {
            store,
            permission_gateway,
            location_provider,
            shift_repository,
            orchestrator,
            events,
        }
    }

    pub fn recorded_events(&self) -> Vec<StoreEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> Self {
        TestApp::new()
    }

    async fn teardown(self) {
        self.orchestrator.shutdown();
    }
}
