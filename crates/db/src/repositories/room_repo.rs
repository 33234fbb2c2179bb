//! Repository for rooms, their facility links and gallery images.

use sqlx::PgPool;

use roomdesk_core::types::{Date, DbId};

use crate::models::room::{CreateRoom, Room, RoomImage, UpdateRoom};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, details, room_type, room_number, price, category, \
                        status, cover_image, created_at, updated_at";

/// Gallery images keep their insertion order via `position`.
const IMAGE_COLUMNS: &str = "id, room_id, image, position";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (name, details, room_type, room_number, price, category, status, cover_image)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.name)
            .bind(&input.details)
            .bind(&input.room_type)
            .bind(&input.room_number)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.status)
            .bind(&input.cover_image)
            .fetch_one(pool)
            .await
    }

    /// Find a room by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every room, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms ORDER BY created_at DESC");
        sqlx::query_as::<_, Room>(&query).fetch_all(pool).await
    }

    /// List rooms in a given inventory status, newest first.
    pub async fn list_by_status(pool: &PgPool, status: &str) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE status = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Room>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial room update. Only non-`None` fields change.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                name = COALESCE($2, name),
                details = COALESCE($3, details),
                room_type = COALESCE($4, room_type),
                room_number = COALESCE($5, room_number),
                price = COALESCE($6, price),
                category = COALESCE($7, category),
                status = COALESCE($8, status),
                cover_image = COALESCE($9, cover_image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.details)
            .bind(&input.room_type)
            .bind(&input.room_number)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.status)
            .bind(&input.cover_image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a room. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the facility links for a room with the given set.
    pub async fn set_facilities(
        pool: &PgPool,
        room_id: DbId,
        facility_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM room_facilities WHERE room_id = $1")
            .bind(room_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "INSERT INTO room_facilities (room_id, facility_id)
             SELECT $1, unnest($2::bigint[])
             ON CONFLICT DO NOTHING",
        )
        .bind(room_id)
        .bind(facility_ids)
        .execute(&mut *tx)
        .await?;
        tx.commit().await
    }

    /// Replace the gallery images for a room, preserving the given order.
    pub async fn replace_images(
        pool: &PgPool,
        room_id: DbId,
        images: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM room_images WHERE room_id = $1")
            .bind(room_id)
            .execute(&mut *tx)
            .await?;
        let positions: Vec<i32> = (0..images.len() as i32).collect();
        sqlx::query(
            "INSERT INTO room_images (room_id, image, position)
             SELECT $1, t.image, t.position
             FROM unnest($2::text[], $3::int[]) AS t(image, position)",
        )
        .bind(room_id)
        .bind(images)
        .bind(&positions)
        .execute(&mut *tx)
        .await?;
        tx.commit().await
    }

    /// Gallery images for a room, in display order.
    pub async fn images_for_room(
        pool: &PgPool,
        room_id: DbId,
    ) -> Result<Vec<RoomImage>, sqlx::Error> {
        let query =
            format!("SELECT {IMAGE_COLUMNS} FROM room_images WHERE room_id = $1 ORDER BY position");
        sqlx::query_as::<_, RoomImage>(&query)
            .bind(room_id)
            .fetch_all(pool)
            .await
    }

    /// Date ranges of approved bookings for a room, soonest first.
    pub async fn booked_dates(
        pool: &PgPool,
        room_id: DbId,
    ) -> Result<Vec<(Date, Date)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT check_in, check_out FROM bookings
             WHERE room_id = $1 AND status = 'approved'
             ORDER BY check_in",
        )
        .bind(room_id)
        .fetch_all(pool)
        .await
    }
}
