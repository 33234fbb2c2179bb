//! Handlers for the booking approval workflow.
//!
//! Bookings are created pending, decided by the admin, and may be
//! cancelled by the guest only while still pending. Approved stays are
//! the only ones that block a room's dates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use roomdesk_core::booking::{total_price, validate_stay, BookingAction, BookingStatus};
use roomdesk_core::error::CoreError;
use roomdesk_core::types::{Date, DbId};
use roomdesk_db::models::booking::{Booking, BookingSummary, CreateBooking};
use roomdesk_db::models::room::Room;
use roomdesk_db::repositories::{BookingRepo, RoomRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::notify::{notify_admins, notify_user, send_email};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /bookings`.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub room_id: DbId,
    pub check_in: Date,
    pub check_out: Date,
}

/// Request body for `POST /bookings/staff`.
#[derive(Debug, Deserialize)]
pub struct StaffBookingRequest {
    /// Username of the guest the booking is for.
    pub username: String,
    pub room_id: DbId,
    pub check_in: Date,
    pub check_out: Date,
}

/// Request body for `POST /bookings/{id}/action`.
#[derive(Debug, Deserialize)]
pub struct BookingActionRequest {
    pub action: String,
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// POST /api/v1/bookings (auth)
///
/// Self-service booking request for the calling guest.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Booking>>)> {
    let booking = place_booking(
        &state,
        auth_user.user_id,
        input.room_id,
        input.check_in,
        input.check_out,
        None,
    )
    .await?;

    notify_admins(
        &state,
        &format!(
            "New booking request from {} for room {}",
            auth_user.username, booking.room_id
        ),
    )
    .await?;

    Ok(ApiResponse::created("Booking request created", booking))
}

/// POST /api/v1/bookings/staff (staff)
///
/// Booking on behalf of a named guest; the staff member is recorded as
/// the creator.
pub async fn staff_create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<StaffBookingRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Booking>>)> {
    let guest = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::UnknownEntity("User")))?;

    let booking = place_booking(
        &state,
        guest.id,
        input.room_id,
        input.check_in,
        input.check_out,
        Some(staff.user_id),
    )
    .await?;

    notify_admins(
        &state,
        &format!(
            "New booking request by staff {} for guest {} on room {}",
            staff.username, guest.username, booking.room_id
        ),
    )
    .await?;

    Ok(ApiResponse::created("Booking request created", booking))
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// POST /api/v1/bookings/{id}/action (admin)
///
/// Body `{"action": "approve"}` or `{"action": "reject"}`. Only pending
/// bookings can be decided; an approval that now overlaps another
/// approved stay is rejected by the storage constraint with 409.
pub async fn action(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<BookingActionRequest>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let action = BookingAction::parse(&input.action).ok_or_else(|| {
        AppError::BadRequest(format!("Invalid action: {}", input.action))
    })?;

    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    if booking.status() != BookingStatus::Pending {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Booking is already {}",
            booking.status().as_str()
        ))));
    }

    let new_status = match action {
        BookingAction::Approve => BookingStatus::Approved,
        BookingAction::Reject => BookingStatus::Rejected,
    };

    let updated = BookingRepo::set_status(&state.pool, id, new_status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    let guest = UserRepo::find_by_id(&state.pool, updated.user_id).await?;
    if let Some(guest) = guest {
        let verdict = match new_status {
            BookingStatus::Approved => "approved",
            _ => "rejected",
        };
        let message = format!(
            "Your booking for room {} ({} to {}) has been {verdict}",
            updated.room_id, updated.check_in, updated.check_out
        );
        send_email(&state, &guest, &format!("Booking {verdict}"), &message).await?;
        notify_user(&state, guest.id, &message).await?;
    }

    Ok(ApiResponse::ok("Booking updated", updated))
}

/// DELETE /api/v1/bookings/{id}/cancel (auth)
///
/// Guest self-service cancellation; allowed only while pending. 404 when
/// the booking is not the caller's own.
pub async fn cancel(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let booking = BookingRepo::find_by_id_for_user(&state.pool, id, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    if booking.status() != BookingStatus::Pending {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Cannot cancel a booking that is already {}",
            booking.status().as_str()
        ))));
    }

    BookingRepo::delete(&state.pool, id).await?;
    notify_admins(
        &state,
        &format!(
            "Booking for room {} ({} to {}) was cancelled by {}",
            booking.room_id, booking.check_in, booking.check_out, auth_user.username
        ),
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/bookings/{id} (admin)
///
/// Hard delete regardless of status. No notifications.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BookingRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// List views
// ---------------------------------------------------------------------------

/// GET /api/v1/bookings/pending (admin)
pub async fn list_pending(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<ApiResponse<Vec<BookingSummary>>>> {
    let bookings = BookingRepo::list_by_status(&state.pool, BookingStatus::Pending).await?;
    Ok(ApiResponse::ok("Pending bookings listed", bookings))
}

/// GET /api/v1/bookings/approved (auth)
pub async fn list_approved(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<BookingSummary>>>> {
    let bookings = BookingRepo::list_by_status(&state.pool, BookingStatus::Approved).await?;
    Ok(ApiResponse::ok("Approved bookings listed", bookings))
}

/// GET /api/v1/bookings/rejected (auth)
pub async fn list_rejected(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<BookingSummary>>>> {
    let bookings = BookingRepo::list_by_status(&state.pool, BookingStatus::Rejected).await?;
    Ok(ApiResponse::ok("Rejected bookings listed", bookings))
}

/// GET /api/v1/bookings/mine (auth)
pub async fn list_mine(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<BookingSummary>>>> {
    let bookings = BookingRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(ApiResponse::ok("Bookings listed", bookings))
}

/// GET /api/v1/bookings/staff (staff)
///
/// Bookings the calling staff member placed on behalf of guests.
pub async fn list_staff(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
) -> AppResult<Json<ApiResponse<Vec<BookingSummary>>>> {
    let bookings = BookingRepo::list_for_staff(&state.pool, staff.user_id).await?;
    Ok(ApiResponse::ok("Bookings listed", bookings))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate the stay, price it, and insert a pending booking.
async fn place_booking(
    state: &AppState,
    guest_id: DbId,
    room_id: DbId,
    check_in: Date,
    check_out: Date,
    booked_by: Option<DbId>,
) -> AppResult<Booking> {
    validate_stay(check_in, check_out).map_err(AppError::Core)?;

    let room = RoomRepo::find_by_id(&state.pool, room_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }))?;

    if BookingRepo::overlapping_approved_exists(&state.pool, room_id, check_in, check_out).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Room already has an approved booking for these dates".into(),
        )));
    }

    let total = price_stay(&room, check_in, check_out)?;
    let booking = BookingRepo::create(
        &state.pool,
        &CreateBooking {
            user_id: guest_id,
            room_id,
            check_in,
            check_out,
            total_price: total,
            booked_by,
        },
    )
    .await?;
    Ok(booking)
}

/// Total price for a stay; a room without a price cannot be booked.
fn price_stay(room: &Room, check_in: Date, check_out: Date) -> AppResult<i64> {
    let nightly = room.price.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Room has no price set".into()))
    })?;
    Ok(total_price(nightly, check_in, check_out))
}
