use std::sync::Arc;

use crate::domain::{LocationProvider, PermissionGateway, ShiftRepository};
use crate::store::ShiftStore;

pub type PermissionGatewayType = Arc<dyn PermissionGateway + Send + Sync>;
pub type LocationProviderType = Arc<dyn LocationProvider + Send + Sync>;
pub type ShiftRepositoryType = Arc<dyn ShiftRepository + Send + Sync>;
pub type ShiftStoreType = Arc<ShiftStore>;

/// Everything the workflow needs, built once at application start and
/// injected into the orchestrator and any UI consumer.
#[derive(Clone)]
pub struct AppState {
    pub permission_gateway: PermissionGatewayType,
    pub location_provider: LocationProviderType,
    pub shift_repository: ShiftRepositoryType,
    pub shift_store: ShiftStoreType,
}

impl AppState {
    pub fn new(
        permission_gateway: PermissionGatewayType,
        location_provider: LocationProviderType,
        shift_repository: ShiftRepositoryType,
        shift_store: ShiftStoreType,
    ) -> Self {
        Self {
            permission_gateway,
            location_provider,
            shift_repository,
            shift_store,
        }
    }
}
