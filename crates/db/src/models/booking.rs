//! Booking entity model and list-view projections.

use serde::Serialize;
use sqlx::FromRow;

use roomdesk_core::booking::BookingStatus;
use roomdesk_core::types::{Date, DbId, Timestamp};

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub user_id: DbId,
    pub room_id: DbId,
    pub check_in: Date,
    pub check_out: Date,
    pub total_price: i64,
    pub status: String,
    pub booked_by: Option<DbId>,
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

impl Booking {
    /// Decode the stored status. The CHECK constraint guarantees one of
    /// the three known values; anything else is treated as pending.
    pub fn status(&self) -> BookingStatus {
        BookingStatus::parse(&self.status).unwrap_or(BookingStatus::Pending)
    }
}

/// Booking joined with the room and guest names, used by the admin
/// list views and the per-user / per-staff history endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingSummary {
    pub id: DbId,
    pub room_id: DbId,
    pub room_name: String,
    pub username: String,
    pub check_in: Date,
    pub check_out: Date,
    pub total_price: i64,
    #[serde(skip)]
    pub status: String,
    /// Human-readable status label ("Pending" / "Approved" / "Rejected").
    #[sqlx(skip)]
    #[serde(rename = "status")]
    pub status_label: String,
}

impl BookingSummary {
    /// Fill in the derived status label after the row is fetched.
    pub fn with_label(mut self) -> Self {
        self.status_label = BookingStatus::parse(&self.status)
            .unwrap_or(BookingStatus::Pending)
            .label()
            .to_string();
        self
    }
}

/// DTO for inserting a new booking. Always persisted as pending.
#[derive(Debug)]
pub struct CreateBooking {
    pub user_id: DbId,
    pub room_id: DbId,
    pub check_in: Date,
    pub check_out: Date,
    pub total_price: i64,
    pub booked_by: Option<DbId>,
}
