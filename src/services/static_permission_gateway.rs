use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::PermissionGateway;

/// Substitutable gateway with a fixed answer. Used by the demo wiring
/// and by workflow tests, which also assert how often the pipeline
/// consulted it.
pub struct StaticPermissionGateway {
    grant: bool,
    requests: AtomicUsize,
}

impl StaticPermissionGateway {
    pub fn granting() -> Self {
        Self {
            grant: true,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn denying() -> Self {
        Self {
            grant: false,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn times_requested(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PermissionGateway for StaticPermissionGateway {
    async fn request_location_permission(&self) -> bool {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.grant
    }
}
