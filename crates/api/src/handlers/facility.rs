//! Handlers for the facility catalog.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use roomdesk_db::models::facility::Facility;
use roomdesk_db::repositories::FacilityRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /facilities`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFacilityRequest {
    #[validate(length(min = 1, message = "Facility name is required"))]
    pub name: String,
}

/// POST /api/v1/facilities (admin)
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateFacilityRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Facility>>)> {
    input.validate()?;
    let facility = FacilityRepo::create(&state.pool, &input.name).await?;
    Ok(ApiResponse::created("Facility created", facility))
}

/// GET /api/v1/facilities (public)
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Facility>>>> {
    let facilities = FacilityRepo::list(&state.pool).await?;
    Ok(ApiResponse::ok("Facilities listed", facilities))
}
