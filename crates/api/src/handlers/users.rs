//! Handlers for profile management and admin user administration.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use roomdesk_core::error::CoreError;
use roomdesk_core::roles::Role;
use roomdesk_core::types::DbId;
use roomdesk_db::models::user::{UpdateProfile, UserResponse};
use roomdesk_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::auth::{insert_user, RegisterRequest};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireAdminOrStaff};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /admin/staff`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStaffRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    pub password: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub staff_code: Option<String>,
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /api/v1/users/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(ApiResponse::ok("Profile fetched", UserResponse::from(&user)))
}

/// PUT /api/v1/users/me
///
/// Partial profile update. Uniqueness checks exclude the caller's own
/// row so a no-op update (resubmitting current values) succeeds.
pub async fn update_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    if let Some(username) = &input.username {
        if UserRepo::username_taken_by_other(&state.pool, username, auth_user.user_id).await? {
            return Err(AppError::Core(CoreError::Conflict(
                "Username is already taken".into(),
            )));
        }
    }
    if let Some(email) = &input.email {
        if UserRepo::email_taken_by_other(&state.pool, email, auth_user.user_id).await? {
            return Err(AppError::Core(CoreError::Conflict(
                "Email is already taken".into(),
            )));
        }
    }
    if let Some(phone) = &input.phone {
        if UserRepo::phone_taken_by_other(&state.pool, phone, auth_user.user_id).await? {
            return Err(AppError::Core(CoreError::Conflict(
                "Phone number is already taken".into(),
            )));
        }
    }

    let user = UserRepo::update_profile(&state.pool, auth_user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(ApiResponse::ok("Profile updated", UserResponse::from(&user)))
}

// ---------------------------------------------------------------------------
// Staff administration (admin only)
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/staff
pub async fn create_staff(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateStaffRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    input.validate()?;
    let staff_code = input.staff_code.clone();
    let user = insert_user(
        &state,
        RegisterRequest {
            username: input.username,
            password: input.password,
            email: input.email,
            phone: input.phone,
            address: input.address,
        },
        Role::Staff,
        staff_code,
    )
    .await?;
    Ok(ApiResponse::created(
        "Staff account created",
        UserResponse::from(&user),
    ))
}

/// GET /api/v1/admin/staff
pub async fn list_staff(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let staff = UserRepo::list_by_role(&state.pool, Role::Staff).await?;
    let data = staff.iter().map(UserResponse::from).collect();
    Ok(ApiResponse::ok("Staff listed", data))
}

/// DELETE /api/v1/admin/staff/{id}
///
/// 404 when the id does not belong to a staff-role user; the role filter
/// makes admin rows unreachable from this path.
pub async fn delete_staff(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete_by_role(&state.pool, id, Role::Staff).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Staff", id }))
    }
}

// ---------------------------------------------------------------------------
// Customer administration
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/customers (admin or staff)
pub async fn list_customers(
    State(state): State<AppState>,
    RequireAdminOrStaff(_caller): RequireAdminOrStaff,
) -> AppResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let customers = UserRepo::list_by_role(&state.pool, Role::Customer).await?;
    let data = customers.iter().map(UserResponse::from).collect();
    Ok(ApiResponse::ok("Customers listed", data))
}

/// DELETE /api/v1/admin/customers/{id} (admin only)
pub async fn delete_customer(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete_by_role(&state.pool, id, Role::Customer).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))
    }
}
