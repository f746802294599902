//! Core traits for ZYNIQ abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// CHAT BACKEND
// =============================================================================

/// A remote text-generation provider.
///
/// Every failure (transport, timeout, provider error, empty reply) surfaces
/// as [`crate::Error::ProviderUnavailable`]. Implementations do not retry.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one system + user exchange and return the raw reply text.
    ///
    /// `session_id` is a correlation token passed through to the provider.
    async fn send(&self, session_id: &str, system_prompt: &str, user_text: &str)
        -> Result<String>;

    /// Fixed downstream model identifier.
    fn model_name(&self) -> &str;
}

// =============================================================================
// REPOSITORY TRAITS
// =============================================================================

/// Write-through store for contact submissions.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a submission as a new record. Never updates an existing one.
    async fn save(&self, submission: ContactSubmission) -> Result<ContactRecord>;

    /// Fetch a stored record by id.
    async fn get(&self, id: Uuid) -> Result<Option<ContactRecord>>;
}

/// Append-only status check log.
#[async_trait]
pub trait StatusCheckRepository: Send + Sync {
    /// Record a new status check for `client_name`.
    async fn create(&self, client_name: &str) -> Result<StatusCheck>;

    /// List up to `limit` status checks in insertion order.
    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>>;
}
