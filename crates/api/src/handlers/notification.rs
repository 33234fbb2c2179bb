//! Handlers for the `/notifications` resource and the admin broadcast.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use roomdesk_core::error::CoreError;
use roomdesk_core::roles::Role;
use roomdesk_core::types::DbId;
use roomdesk_db::models::notification::Notification;
use roomdesk_db::repositories::{NotificationRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /admin/broadcast`.
#[derive(Debug, Deserialize)]
pub struct BroadcastRequest {
    pub message: String,
    /// `staff` or `users`.
    pub target: String,
}

/// Payload for `GET /notifications/unread-count`.
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// Payload for `POST /admin/broadcast`.
#[derive(Debug, Serialize)]
pub struct BroadcastResponse {
    /// Number of notification rows created.
    pub delivered: u64,
}

/// GET /api/v1/notifications (auth)
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<Notification>>>> {
    let notifications = NotificationRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(ApiResponse::ok("Notifications listed", notifications))
}

/// GET /api/v1/notifications/unread-count (auth)
pub async fn unread_count(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<UnreadCountResponse>>> {
    let count = NotificationRepo::unread_count(&state.pool, auth_user.user_id).await?;
    Ok(ApiResponse::ok(
        "Unread count fetched",
        UnreadCountResponse { count },
    ))
}

/// POST /api/v1/notifications/mark-read (auth)
///
/// Bulk, idempotent; only the caller's rows are touched.
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    NotificationRepo::mark_all_read(&state.pool, auth_user.user_id).await?;
    Ok(ApiResponse::message("Notifications marked read"))
}

/// POST /api/v1/admin/broadcast (admin)
///
/// Send the same message to every member of a role cohort: `staff` or
/// `users` (customers).
pub async fn broadcast(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<BroadcastRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<BroadcastResponse>>)> {
    if input.message.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message is required".into(),
        )));
    }
    let role = match input.target.as_str() {
        "staff" => Role::Staff,
        "users" => Role::Customer,
        other => {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid target: {other}"
            ))));
        }
    };

    let recipients = UserRepo::list_by_role(&state.pool, role).await?;
    let ids: Vec<DbId> = recipients.iter().map(|u| u.id).collect();
    let delivered = if ids.is_empty() {
        0
    } else {
        NotificationRepo::create_many(&state.pool, &ids, &input.message).await?
    };

    Ok(ApiResponse::created(
        "Broadcast sent",
        BroadcastResponse { delivered },
    ))
}
