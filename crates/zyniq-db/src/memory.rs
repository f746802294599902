//! In-memory store for tests.
//!
//! Implements both repository traits over shared vectors. A store switched
//! into failure mode rejects every call with a database error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use zyniq_core::{
    ContactRecord, ContactRepository, ContactSubmission, Error, Result, StatusCheck,
    StatusCheckRepository,
};

/// In-memory contact and status check store.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    contacts: Arc<RwLock<Vec<ContactRecord>>>,
    status_checks: Arc<RwLock<Vec<StatusCheck>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails.
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of stored contact records in insertion order.
    pub async fn contacts(&self) -> Vec<ContactRecord> {
        self.contacts.read().await.clone()
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for InMemoryStore {
    async fn save(&self, submission: ContactSubmission) -> Result<ContactRecord> {
        self.check_available()?;
        let record = ContactRecord::from_submission(submission);
        self.contacts.write().await.push(record.clone());
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ContactRecord>> {
        self.check_available()?;
        Ok(self
            .contacts
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}

#[async_trait]
impl StatusCheckRepository for InMemoryStore {
    async fn create(&self, client_name: &str) -> Result<StatusCheck> {
        self.check_available()?;
        let check = StatusCheck {
            id: zyniq_core::new_v7(),
            client_name: client_name.to_string(),
            timestamp: Utc::now(),
        };
        self.status_checks.write().await.push(check.clone());
        Ok(check)
    }

    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>> {
        self.check_available()?;
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .status_checks
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }
}
