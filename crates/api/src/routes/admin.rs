//! Route definitions for the `/admin` resource.
//!
//! Role checks live in the handlers' RBAC extractors, not here.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{complaint, notification, users};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /staff                      -> create_staff (admin)
/// GET    /staff                      -> list_staff (admin)
/// DELETE /staff/{id}                 -> delete_staff (admin)
/// GET    /customers                  -> list_customers (admin or staff)
/// DELETE /customers/{id}             -> delete_customer (admin)
/// POST   /broadcast                  -> broadcast (admin)
/// GET    /complaints                 -> complaint list (admin)
/// POST   /complaints/{id}/resolve    -> resolve (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/staff", post(users::create_staff).get(users::list_staff))
        .route("/staff/{id}", delete(users::delete_staff))
        .route("/customers", get(users::list_customers))
        .route("/customers/{id}", delete(users::delete_customer))
        .route("/broadcast", post(notification::broadcast))
        .route("/complaints", get(complaint::list))
        .route("/complaints/{id}/resolve", post(complaint::resolve))
}
