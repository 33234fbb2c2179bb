//! Handlers for room inventory.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use roomdesk_core::error::CoreError;
use roomdesk_core::types::{Date, DbId};
use roomdesk_db::models::room::{CreateRoom, Room, RoomResponse, UpdateRoom};
use roomdesk_db::repositories::{FacilityRepo, RoomRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Inventory statuses accepted on create/update.
const ROOM_STATUSES: &[&str] = &["available", "booked", "maintenance"];
/// Room types accepted on create/update.
const ROOM_TYPES: &[&str] = &["single", "double", "suite"];
/// Categories accepted on create/update.
const ROOM_CATEGORIES: &[&str] = &["ac", "non_ac"];

/// Request body for `POST /rooms`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, message = "Room name is required"))]
    pub name: String,
    pub details: Option<String>,
    pub room_type: Option<String>,
    #[validate(length(min = 1, message = "Room number is required"))]
    pub room_number: String,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub facility_ids: Vec<DbId>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Request body for `PUT /rooms/{id}`. `None` fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateRoomRequest {
    #[serde(flatten)]
    pub fields: UpdateRoom,
    /// When present, replaces the room's facility set.
    pub facility_ids: Option<Vec<DbId>>,
    /// When present, replaces the room's gallery images.
    pub images: Option<Vec<String>>,
}

/// A stay occupied by an approved booking.
#[derive(Debug, Serialize)]
pub struct BookedRange {
    pub check_in: Date,
    pub check_out: Date,
}

/// POST /api/v1/rooms (admin)
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateRoomRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<RoomResponse>>)> {
    input.validate()?;
    validate_enum("room_type", input.room_type.as_deref(), ROOM_TYPES)?;
    validate_enum("category", input.category.as_deref(), ROOM_CATEGORIES)?;
    validate_enum("status", input.status.as_deref(), ROOM_STATUSES)?;

    let room = RoomRepo::create(
        &state.pool,
        &CreateRoom {
            name: input.name,
            details: input.details,
            room_type: input.room_type,
            room_number: input.room_number,
            price: input.price,
            category: input.category,
            status: input.status.unwrap_or_else(|| "available".to_string()),
            cover_image: input.cover_image,
        },
    )
    .await?;

    if !input.facility_ids.is_empty() {
        RoomRepo::set_facilities(&state.pool, room.id, &input.facility_ids).await?;
    }
    if !input.images.is_empty() {
        RoomRepo::replace_images(&state.pool, room.id, &input.images).await?;
    }

    let response = embed_room(&state, room).await?;
    Ok(ApiResponse::created("Room created", response))
}

/// GET /api/v1/rooms (public)
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Room>>>> {
    let rooms = RoomRepo::list(&state.pool).await?;
    Ok(ApiResponse::ok("Rooms listed", rooms))
}

/// GET /api/v1/rooms/available (auth; staff booking screen)
pub async fn available(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<Room>>>> {
    let rooms = RoomRepo::list_by_status(&state.pool, "available").await?;
    Ok(ApiResponse::ok("Available rooms listed", rooms))
}

/// GET /api/v1/rooms/{id} (public)
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<RoomResponse>>> {
    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    let response = embed_room(&state, room).await?;
    Ok(ApiResponse::ok("Room fetched", response))
}

/// PUT /api/v1/rooms/{id} (admin)
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoomRequest>,
) -> AppResult<Json<ApiResponse<RoomResponse>>> {
    validate_enum("room_type", input.fields.room_type.as_deref(), ROOM_TYPES)?;
    validate_enum("category", input.fields.category.as_deref(), ROOM_CATEGORIES)?;
    validate_enum("status", input.fields.status.as_deref(), ROOM_STATUSES)?;

    let room = RoomRepo::update(&state.pool, id, &input.fields)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;

    if let Some(facility_ids) = &input.facility_ids {
        RoomRepo::set_facilities(&state.pool, id, facility_ids).await?;
    }
    if let Some(images) = &input.images {
        RoomRepo::replace_images(&state.pool, id, images).await?;
    }

    let response = embed_room(&state, room).await?;
    Ok(ApiResponse::ok("Room updated", response))
}

/// DELETE /api/v1/rooms/{id} (admin)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RoomRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Room", id }))
    }
}

/// GET /api/v1/rooms/{id}/booked-dates (public)
///
/// Approved stays only; pending and rejected bookings never appear.
pub async fn booked_dates(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<BookedRange>>>> {
    // 404 for unknown rooms rather than an empty list.
    RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;

    let ranges = RoomRepo::booked_dates(&state.pool, id)
        .await?
        .into_iter()
        .map(|(check_in, check_out)| BookedRange {
            check_in,
            check_out,
        })
        .collect();
    Ok(ApiResponse::ok("Booked dates listed", ranges))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a room's facilities and gallery for the embedded response shape.
async fn embed_room(state: &AppState, room: Room) -> AppResult<RoomResponse> {
    let facilities = FacilityRepo::list_for_room(&state.pool, room.id).await?;
    let images = RoomRepo::images_for_room(&state.pool, room.id).await?;
    Ok(RoomResponse {
        room,
        facilities,
        images,
    })
}

/// Reject values outside the known set for a text-enum column.
fn validate_enum(field: &str, value: Option<&str>, allowed: &[&str]) -> AppResult<()> {
    if let Some(v) = value {
        if !allowed.contains(&v) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid {field}: {v}"
            ))));
        }
    }
    Ok(())
}
