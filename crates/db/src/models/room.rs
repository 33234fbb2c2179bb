//! Room and room-image models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use roomdesk_core::types::{DbId, Timestamp};

use crate::models::facility::Facility;

/// A row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub name: String,
    pub details: Option<String>,
    pub room_type: Option<String>,
    pub room_number: String,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub status: String,
    pub cover_image: Option<String>,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

/// A row from the `room_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomImage {
    pub id: DbId,
    #[serde(skip)]
    pub room_id: DbId,
    pub image: String,
    #[serde(skip)]
    pub position: i32,
}

/// Room with its facilities and ordered gallery images embedded, as
/// returned by the read endpoints.
#[derive(Debug, Serialize)]
pub struct RoomResponse {
    #[serde(flatten)]
    pub room: Room,
    pub facilities: Vec<Facility>,
    pub images: Vec<RoomImage>,
}

/// DTO for inserting a new room.
#[derive(Debug)]
pub struct CreateRoom {
    pub name: String,
    pub details: Option<String>,
    pub room_type: Option<String>,
    pub room_number: String,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub status: String,
    pub cover_image: Option<String>,
}

/// DTO for a partial room update. `None` fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateRoom {
    pub name: Option<String>,
    pub details: Option<String>,
    pub room_type: Option<String>,
    pub room_number: Option<String>,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub cover_image: Option<String>,
}
