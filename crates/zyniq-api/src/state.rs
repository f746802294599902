//! Shared application state.

use std::sync::Arc;

use zyniq_core::{ChatBackend, ContactRepository, StatusCheckRepository};
use zyniq_db::Database;
use zyniq_inference::{BlueprintGenerator, BlueprintRefiner};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub generator: BlueprintGenerator,
    pub refiner: BlueprintRefiner,
    pub contacts: Arc<dyn ContactRepository>,
    pub status_checks: Arc<dyn StatusCheckRepository>,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        contacts: Arc<dyn ContactRepository>,
        status_checks: Arc<dyn StatusCheckRepository>,
    ) -> Self {
        Self {
            generator: BlueprintGenerator::new(backend.clone()),
            refiner: BlueprintRefiner::new(backend),
            contacts,
            status_checks,
        }
    }

    /// Wire the PostgreSQL repositories of `db`.
    pub fn from_database(db: &Database, backend: Arc<dyn ChatBackend>) -> Self {
        Self::new(
            backend,
            Arc::new(db.contacts.clone()),
            Arc::new(db.status_checks.clone()),
        )
    }
}
