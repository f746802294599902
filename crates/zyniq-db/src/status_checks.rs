//! Status check log repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use tracing::debug;

use zyniq_core::{Error, Result, StatusCheck, StatusCheckRepository};

/// PostgreSQL status check repository.
#[derive(Clone)]
pub struct PgStatusCheckRepository {
    pool: Pool<Postgres>,
}

impl PgStatusCheckRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn parse_row(row: &PgRow) -> Result<StatusCheck> {
        Ok(StatusCheck {
            id: row.try_get("id").map_err(Error::Database)?,
            client_name: row.try_get("client_name").map_err(Error::Database)?,
            timestamp: row.try_get("timestamp").map_err(Error::Database)?,
        })
    }
}

#[async_trait]
impl StatusCheckRepository for PgStatusCheckRepository {
    async fn create(&self, client_name: &str) -> Result<StatusCheck> {
        let check = StatusCheck {
            id: zyniq_core::new_v7(),
            client_name: client_name.to_string(),
            timestamp: Utc::now(),
        };

        sqlx::query("INSERT INTO status_check (id, client_name, timestamp) VALUES ($1, $2, $3)")
            .bind(check.id)
            .bind(&check.client_name)
            .bind(check.timestamp)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "status_checks",
            op = "create",
            client_name = %check.client_name,
            "Status check recorded"
        );
        Ok(check)
    }

    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>> {
        let rows = sqlx::query(
            "SELECT id, client_name, timestamp FROM status_check
             ORDER BY timestamp ASC, id ASC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        rows.iter().map(Self::parse_row).collect()
    }
}
