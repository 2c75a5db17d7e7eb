use crate::helpers::{TestApp, TEST_LATITUDE, TEST_LONGITUDE};
use color_eyre::eyre::eyre;
use shift_finder::domain::{
    LoadError, RepositoryError, ShiftId, ShiftsPage,
};
use shift_finder::services::{
    StaticLocationProvider, StaticPermissionGateway, StaticShiftRepository,
};
use shift_finder::store::StoreEvent;
use shift_finder::RunOutcome;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn happy_path_populates_the_store(app: &mut TestApp) {
    let outcome = app.orchestrator.run().await;

    assert_eq!(outcome, RunOutcome::Ready);
    assert!(!app.store.loading());
    assert!(app.store.error().is_none());
    assert_eq!(app.store.shift_count(), 2);

    let location = app
        .store
        .current_location()
        .expect("Location should be recorded");
    assert!((location.latitude - TEST_LATITUDE).abs() < 1e-9);
    assert!((location.longitude - TEST_LONGITUDE).abs() < 1e-9);

    // One pass through each phase.
    assert_eq!(app.permission_gateway.times_requested(), 1);
    assert_eq!(app.location_provider.times_requested(), 1);
    assert_eq!(app.shift_repository.times_called(), 1);

    // Store writes arrive in the fixed phase order.
    assert_eq!(
        app.recorded_events(),
        vec![
            StoreEvent::CurrentLocation,
            StoreEvent::Loading,
            StoreEvent::Error,
            StoreEvent::Shifts,
            StoreEvent::Loading,
        ]
    );
}

#[tokio::test]
async fn permission_denial_halts_before_the_location_phase() {
    let app = TestApp::with_collaborators(
        StaticPermissionGateway::denying(),
        StaticLocationProvider::with_fix(TEST_LATITUDE, TEST_LONGITUDE),
        StaticShiftRepository::new(),
    );

    let outcome = app.orchestrator.run().await;

    assert_eq!(outcome, RunOutcome::PermissionDenied);
    // Denial is not a data error: the store keeps its initial values.
    assert!(app.store.shifts().is_empty());
    assert!(app.store.current_location().is_none());
    assert!(!app.store.loading());
    assert!(app.store.error().is_none());
    assert!(app.recorded_events().is_empty());

    assert_eq!(app.location_provider.times_requested(), 0);
    assert_eq!(app.shift_repository.times_called(), 0);
}

#[tokio::test]
async fn failed_fetch_recovers_on_refresh_without_redoing_earlier_phases() {
    let repository = StaticShiftRepository::new();
    repository.push_response(Err(RepositoryError::Network(eyre!(
        "connection refused"
    ))));
    let app = TestApp::with_collaborators(
        StaticPermissionGateway::granting(),
        StaticLocationProvider::with_fix(TEST_LATITUDE, TEST_LONGITUDE),
        repository,
    );

    let outcome = app.orchestrator.run().await;
    assert_eq!(outcome, RunOutcome::FetchFailed);
    assert_eq!(app.store.error(), Some(LoadError::Network));
    assert!(!app.store.loading());
    assert!(app.store.shifts().is_empty());

    // The script is exhausted, so the refresh succeeds.
    let outcome = app.orchestrator.refresh().await;
    assert_eq!(outcome, RunOutcome::Ready);
    assert!(app.store.error().is_none());
    assert!(!app.store.loading());
    assert!(app.store.shift_count() > 0);

    // Refresh reused the known location: neither the gateway nor the
    // provider was consulted again.
    assert_eq!(app.permission_gateway.times_requested(), 1);
    assert_eq!(app.location_provider.times_requested(), 1);
    assert_eq!(app.shift_repository.times_called(), 2);
}

#[test_context(TestApp)]
#[tokio::test]
async fn empty_result_is_a_success_with_no_shifts(app: &mut TestApp) {
    app.shift_repository.push_response(Ok(ShiftsPage {
        data: Vec::new(),
        status: 200,
    }));

    let outcome = app.orchestrator.run().await;

    assert_eq!(outcome, RunOutcome::Ready);
    assert!(app.store.error().is_none());
    assert!(!app.store.loading());
    assert_eq!(app.store.shift_count(), 0);
}

#[test_context(TestApp)]
#[tokio::test]
async fn detail_lookup_finds_current_shifts_and_rejects_stale_ids(
    app: &mut TestApp,
) {
    app.orchestrator.run().await;

    let shifts = app.store.shifts();
    let known = &shifts[0].id;
    assert_eq!(app.store.require_shift(known).unwrap().id, *known);

    let stale = ShiftId::parse("no-longer-listed").unwrap();
    let error = app.store.require_shift(&stale).unwrap_err();
    assert_eq!(error.to_string(), "Shift not found: no-longer-listed");
}
