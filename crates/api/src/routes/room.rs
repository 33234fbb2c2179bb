//! Route definitions for the `/rooms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::room;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// POST   /                   -> create (admin)
/// GET    /                   -> list (public)
/// GET    /available          -> available (auth)
/// GET    /{id}               -> get_by_id (public)
/// PUT    /{id}               -> update (admin)
/// DELETE /{id}               -> delete (admin)
/// GET    /{id}/booked-dates  -> booked_dates (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(room::list).post(room::create))
        .route("/available", get(room::available))
        .route(
            "/{id}",
            get(room::get_by_id).put(room::update).delete(room::delete),
        )
        .route("/{id}/booked-dates", get(room::booked_dates))
}
