//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, password_reset};
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST   /admin                      -> create_admin (public)
/// GET    /admin-exists               -> admin_exists (public)
/// POST   /register                   -> register (public)
/// POST   /login                      -> login (public)
/// POST   /logout                     -> logout (auth)
/// POST   /change-password            -> change_password (auth)
/// POST   /password-reset/request     -> request_reset (public)
/// POST   /password-reset/verify      -> verify_otp (public)
/// POST   /password-reset/reset       -> reset_password (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", post(auth::create_admin))
        .route("/admin-exists", get(auth::admin_exists))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/change-password", post(auth::change_password))
        .route("/password-reset/request", post(password_reset::request_reset))
        .route("/password-reset/verify", post(password_reset::verify_otp))
        .route("/password-reset/reset", post(password_reset::reset_password))
}
