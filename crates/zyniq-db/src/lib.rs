//! # zyniq-db
//!
//! PostgreSQL store for the ZYNIQ blueprint service.
//!
//! This crate provides:
//! - Connection pool management
//! - Contact submission repository (JSONB payloads)
//! - Status check log repository
//! - In-memory store for tests (feature `mock`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use zyniq_db::{Database, ContactRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/zyniq").await?;
//!     db.migrate().await?;
//!
//!     let record = db.contacts.save(submission).await?;
//!     println!("Stored contact: {}", record.id);
//!
//!     db.close().await;
//!     Ok(())
//! }
//! ```

pub mod contacts;
pub mod pool;
pub mod status_checks;

#[cfg(any(test, feature = "mock"))]
pub mod memory;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use zyniq_core::*;

pub use contacts::PgContactRepository;
#[cfg(any(test, feature = "mock"))]
pub use memory::InMemoryStore;
pub use pool::{create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};
pub use status_checks::PgStatusCheckRepository;

/// Combined database context with all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Contact submission repository.
    pub contacts: PgContactRepository,
    /// Status check log repository.
    pub status_checks: PgStatusCheckRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            contacts: PgContactRepository::new(pool.clone()),
            status_checks: PgStatusCheckRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }

    /// Close every pooled connection. Waits for checked-out connections
    /// to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!(
            subsystem = "database",
            component = "pool",
            op = "close",
            "Database connection pool closed"
        );
    }
}
