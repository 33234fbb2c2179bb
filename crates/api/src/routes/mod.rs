pub mod admin;
pub mod auth;
pub mod booking;
pub mod complaint;
pub mod facility;
pub mod health;
pub mod notification;
pub mod room;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/admin                        create the single admin (public)
/// /auth/admin-exists                 bootstrap probe (public)
/// /auth/register                     customer self-registration (public)
/// /auth/login                        login (public)
/// /auth/logout                       logout (auth)
/// /auth/change-password              change own password (auth)
/// /auth/password-reset/request       request OTP (public)
/// /auth/password-reset/verify        verify OTP (public)
/// /auth/password-reset/reset         set new password (public)
///
/// /users/me                          get, update own profile (auth)
///
/// /admin/staff                       create, list staff (admin)
/// /admin/staff/{id}                  delete staff (admin)
/// /admin/customers                   list customers (admin or staff)
/// /admin/customers/{id}              delete customer (admin)
/// /admin/broadcast                   notify a role cohort (admin)
/// /admin/complaints                  list complaints (admin)
/// /admin/complaints/{id}/resolve     resolve complaint (admin)
///
/// /facilities                        create (admin), list (public)
///
/// /rooms                             create (admin), list (public)
/// /rooms/available                   available rooms (auth)
/// /rooms/{id}                        get (public), update, delete (admin)
/// /rooms/{id}/booked-dates           approved stays (public)
///
/// /bookings                          create (auth)
/// /bookings/staff                    create for guest (staff), own list (staff)
/// /bookings/pending                  list (admin)
/// /bookings/approved                 list (auth)
/// /bookings/rejected                 list (auth)
/// /bookings/mine                     own history (auth)
/// /bookings/{id}/action              approve / reject (admin)
/// /bookings/{id}/cancel              cancel while pending (auth)
/// /bookings/{id}                     hard delete (admin)
///
/// /notifications                     list (auth)
/// /notifications/unread-count        unread count (auth)
/// /notifications/mark-read           mark all read (auth)
///
/// /complaints                        submit (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/admin", admin::router())
        .nest("/facilities", facility::router())
        .nest("/rooms", room::router())
        .nest("/bookings", booking::router())
        .nest("/notifications", notification::router())
        .nest("/complaints", complaint::router())
}
