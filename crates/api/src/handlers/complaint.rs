//! Handlers for the complaints resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use roomdesk_core::error::CoreError;
use roomdesk_core::types::DbId;
use roomdesk_db::models::complaint::{Complaint, ComplaintSummary};
use roomdesk_db::repositories::ComplaintRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::notify::notify_admins;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /complaints`.
#[derive(Debug, Deserialize)]
pub struct CreateComplaintRequest {
    pub message: String,
}

/// POST /api/v1/complaints (auth)
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateComplaintRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Complaint>>)> {
    if input.message.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message is required".into(),
        )));
    }

    let complaint = ComplaintRepo::create(&state.pool, auth_user.user_id, &input.message).await?;
    notify_admins(
        &state,
        &format!("New complaint from {}", auth_user.username),
    )
    .await?;

    Ok(ApiResponse::created("Complaint submitted", complaint))
}

/// GET /api/v1/admin/complaints (admin)
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<ApiResponse<Vec<ComplaintSummary>>>> {
    let complaints = ComplaintRepo::list_all(&state.pool).await?;
    Ok(ApiResponse::ok("Complaints listed", complaints))
}

/// POST /api/v1/admin/complaints/{id}/resolve (admin)
///
/// Idempotent; resolving an already-resolved complaint succeeds.
pub async fn resolve(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Complaint>>> {
    let complaint = ComplaintRepo::resolve(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;
    Ok(ApiResponse::ok("Complaint resolved", complaint))
}
