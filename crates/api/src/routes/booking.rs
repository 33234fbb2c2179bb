//! Route definitions for the `/bookings` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST   /              -> create (auth)
/// POST   /staff         -> staff_create (staff)
/// GET    /staff         -> list_staff (staff)
/// GET    /pending       -> list_pending (admin)
/// GET    /approved      -> list_approved (auth)
/// GET    /rejected      -> list_rejected (auth)
/// GET    /mine          -> list_mine (auth)
/// POST   /{id}/action   -> action (admin)
/// DELETE /{id}/cancel   -> cancel (auth)
/// DELETE /{id}          -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(booking::create))
        .route(
            "/staff",
            post(booking::staff_create).get(booking::list_staff),
        )
        .route("/pending", get(booking::list_pending))
        .route("/approved", get(booking::list_approved))
        .route("/rejected", get(booking::list_rejected))
        .route("/mine", get(booking::list_mine))
        .route("/{id}/action", post(booking::action))
        .route("/{id}/cancel", delete(booking::cancel))
        .route("/{id}", delete(booking::delete))
}
