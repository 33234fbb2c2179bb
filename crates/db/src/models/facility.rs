//! Facility catalog model.

use serde::Serialize;
use sqlx::FromRow;

use roomdesk_core::types::{DbId, Timestamp};

/// A row from the `facilities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Facility {
    pub id: DbId,
    pub name: String,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}
