//! Route definitions for the `/complaints` resource.
//!
//! Admin-side complaint routes live under `/admin`.

use axum::routing::post;
use axum::Router;

use crate::handlers::complaint;
use crate::state::AppState;

/// Routes mounted at `/complaints`.
///
/// ```text
/// POST   /    -> create (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(complaint::create))
}
