//! Repository for the `facilities` catalog.

use sqlx::PgPool;

use roomdesk_core::types::DbId;

use crate::models::facility::Facility;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for facilities.
pub struct FacilityRepo;

impl FacilityRepo {
    /// Insert a new facility, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Facility, sqlx::Error> {
        let query = format!("INSERT INTO facilities (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Facility>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// List all facilities, alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Facility>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facilities ORDER BY name");
        sqlx::query_as::<_, Facility>(&query).fetch_all(pool).await
    }

    /// Facilities attached to a room, alphabetically.
    pub async fn list_for_room(pool: &PgPool, room_id: DbId) -> Result<Vec<Facility>, sqlx::Error> {
        sqlx::query_as::<_, Facility>(
            "SELECT f.id, f.name, f.created_at, f.updated_at
             FROM facilities f
             JOIN room_facilities rf ON rf.facility_id = f.id
             WHERE rf.room_id = $1
             ORDER BY f.name",
        )
        .bind(room_id)
        .fetch_all(pool)
        .await
    }
}
