//! Repository for the `complaints` table.

use sqlx::PgPool;

use roomdesk_core::types::DbId;

use crate::models::complaint::{Complaint, ComplaintSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, message, is_resolved, created_at";

/// Provides CRUD operations for complaints.
pub struct ComplaintRepo;

impl ComplaintRepo {
    /// Insert a new unresolved complaint, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        message: &str,
    ) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaints (user_id, message)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(user_id)
            .bind(message)
            .fetch_one(pool)
            .await
    }

    /// All complaints joined with the author's username, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ComplaintSummary>, sqlx::Error> {
        sqlx::query_as::<_, ComplaintSummary>(
            "SELECT c.id, u.username, c.message, c.is_resolved, c.created_at
             FROM complaints c
             JOIN users u ON u.id = c.user_id
             ORDER BY c.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Mark a complaint resolved. Idempotent; returns the updated row, or
    /// `None` if the complaint does not exist.
    pub async fn resolve(pool: &PgPool, id: DbId) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET is_resolved = true, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
