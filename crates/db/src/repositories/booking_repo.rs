//! Repository for the `bookings` table.
//!
//! Approved bookings are also guarded by an exclusion constraint in the
//! database, so two racing approvals for overlapping stays cannot both
//! commit.

use sqlx::PgPool;

use roomdesk_core::booking::BookingStatus;
use roomdesk_core::types::{Date, DbId};

use crate::models::booking::{Booking, BookingSummary, CreateBooking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, room_id, check_in, check_out, total_price, \
                        status, booked_by, created_at, updated_at";

/// Joined projection used by the list endpoints.
const SUMMARY_SELECT: &str = "SELECT b.id, b.room_id, r.name AS room_name, u.username, \
         b.check_in, b.check_out, b.total_price, b.status
         FROM bookings b
         JOIN rooms r ON r.id = b.room_id
         JOIN users u ON u.id = b.user_id";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new pending booking, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (user_id, room_id, check_in, check_out, total_price, booked_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.user_id)
            .bind(input.room_id)
            .bind(input.check_in)
            .bind(input.check_out)
            .bind(input.total_price)
            .bind(input.booked_by)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a booking only if it belongs to the given guest.
    pub async fn find_by_id_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Does any approved booking for the room overlap the half-open
    /// `[check_in, check_out)` range?
    pub async fn overlapping_approved_exists(
        pool: &PgPool,
        room_id: DbId,
        check_in: Date,
        check_out: Date,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE room_id = $1
                  AND status = 'approved'
                  AND check_in < $3
                  AND check_out > $2
             )",
        )
        .bind(room_id)
        .bind(check_in)
        .bind(check_out)
        .fetch_one(pool)
        .await
    }

    /// Transition a booking to a new status, returning the updated row.
    ///
    /// Approvals may hit the overlap exclusion constraint, surfacing as a
    /// database error the API layer maps to a conflict.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a booking. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Bookings in a given status, joined for display, soonest stay last.
    pub async fn list_by_status(
        pool: &PgPool,
        status: BookingStatus,
    ) -> Result<Vec<BookingSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE b.status = $1 ORDER BY b.check_in DESC");
        let rows = sqlx::query_as::<_, BookingSummary>(&query)
            .bind(status.as_str())
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(BookingSummary::with_label).collect())
    }

    /// Booking history for a guest, most recent stay first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<BookingSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE b.user_id = $1 ORDER BY b.check_in DESC");
        let rows = sqlx::query_as::<_, BookingSummary>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(BookingSummary::with_label).collect())
    }

    /// Bookings a staff member placed on behalf of guests.
    pub async fn list_for_staff(
        pool: &PgPool,
        staff_id: DbId,
    ) -> Result<Vec<BookingSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE b.booked_by = $1 ORDER BY b.check_in DESC");
        let rows = sqlx::query_as::<_, BookingSummary>(&query)
            .bind(staff_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(BookingSummary::with_label).collect())
    }
}
