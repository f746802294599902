//! Contact submission repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{Pool, Postgres, Row};
use tracing::{error, info};
use uuid::Uuid;

use zyniq_core::{
    ContactRecord, ContactRepository, ContactSubmission, Error, JsonObject, Result,
};

/// PostgreSQL contact repository.
///
/// The contact map and the blueprint are stored as JSONB exactly as given.
#[derive(Clone)]
pub struct PgContactRepository {
    pool: Pool<Postgres>,
}

impl PgContactRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Number of stored submissions.
    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM contact")
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        row.try_get("n").map_err(Error::Database)
    }

    fn parse_row(row: &PgRow) -> Result<ContactRecord> {
        let contact: Json<BTreeMap<String, String>> =
            row.try_get("contact").map_err(Error::Database)?;
        let blueprint: Json<JsonObject> = row.try_get("blueprint").map_err(Error::Database)?;
        Ok(ContactRecord {
            id: row.try_get("id").map_err(Error::Database)?,
            contact: contact.0,
            blueprint: blueprint.0,
            timestamp: row.try_get("submitted_timestamp").map_err(Error::Database)?,
            created_at: row.try_get("created_at").map_err(Error::Database)?,
        })
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn save(&self, submission: ContactSubmission) -> Result<ContactRecord> {
        let record = ContactRecord::from_submission(submission);

        let result = sqlx::query(
            "INSERT INTO contact (id, contact, blueprint, submitted_timestamp, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(record.id)
        .bind(Json(&record.contact))
        .bind(Json(&record.blueprint))
        .bind(&record.timestamp)
        .bind(record.created_at)
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            error!(
                subsystem = "database",
                component = "contacts",
                op = "save",
                contact_id = %record.id,
                db_table = "contact",
                error = %e,
                "Failed to store contact submission"
            );
            return Err(Error::Database(e));
        }

        info!(
            subsystem = "database",
            component = "contacts",
            op = "save",
            contact_id = %record.id,
            "Contact submission stored"
        );
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ContactRecord>> {
        let row = sqlx::query(
            "SELECT id, contact, blueprint, submitted_timestamp, created_at
             FROM contact WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        row.as_ref().map(Self::parse_row).transpose()
    }
}
