//! Notification fan-out and outbound email helpers.
//!
//! Booking and complaint transitions call these as side effects. The
//! admin broadcast targets every admin-role user; zero admins is a no-op
//! and multiple admins each get their own row.

use roomdesk_core::roles::Role;
use roomdesk_core::types::DbId;
use roomdesk_db::models::user::User;
use roomdesk_db::repositories::{NotificationRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Create an unread notification for a single user.
pub async fn notify_user(state: &AppState, user_id: DbId, message: &str) -> AppResult<()> {
    NotificationRepo::create(&state.pool, user_id, message).await?;
    Ok(())
}

/// Create an unread notification for every admin-role user.
pub async fn notify_admins(state: &AppState, message: &str) -> AppResult<()> {
    let admins = UserRepo::list_by_role(&state.pool, Role::Admin).await?;
    if admins.is_empty() {
        tracing::warn!("No admin users to notify");
        return Ok(());
    }
    let ids: Vec<DbId> = admins.iter().map(|u| u.id).collect();
    NotificationRepo::create_many(&state.pool, &ids, message).await?;
    Ok(())
}

/// Send an email to a user if delivery is possible.
///
/// Skipped with a warning when SMTP is unconfigured or the user has no
/// email address on file. A transport failure fails the request.
pub async fn send_email(state: &AppState, user: &User, subject: &str, body: &str) -> AppResult<()> {
    let Some(mailer) = &state.mailer else {
        tracing::warn!(user_id = user.id, "SMTP not configured; skipping email");
        return Ok(());
    };
    let Some(email) = &user.email else {
        tracing::warn!(user_id = user.id, "User has no email address; skipping email");
        return Ok(());
    };
    mailer
        .send(email, subject, body)
        .await
        .map_err(|e| AppError::InternalError(format!("Email delivery failed: {e}")))?;
    Ok(())
}
