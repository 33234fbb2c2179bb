//! Complaint entity model.

use serde::Serialize;
use sqlx::FromRow;

use roomdesk_core::types::{DbId, Timestamp};

/// A row from the `complaints` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Complaint {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    pub message: String,
    pub is_resolved: bool,
    pub created_at: Timestamp,
}

/// Complaint joined with the author's username, for the admin list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ComplaintSummary {
    pub id: DbId,
    pub username: String,
    pub message: String,
    pub is_resolved: bool,
    pub created_at: Timestamp,
}
