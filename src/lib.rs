//! Core of a "nearby work shifts" client: the permission -> location ->
//! fetch workflow, the observable shift store it feeds, and the pure
//! derivation rules the views compute from shift data. Rendering and
//! navigation are consumers of this crate, not part of it.

pub mod app_state;
pub mod domain;
pub mod services;
pub mod store;
pub mod utils;
pub mod workflow;

pub use app_state::AppState;
pub use store::{ShiftStore, StoreEvent, SubscriberId};
pub use workflow::{RunOutcome, WorkflowOrchestrator};
