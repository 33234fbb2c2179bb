//! Handlers for account bootstrap, registration, login, and credentials.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use roomdesk_core::error::CoreError;
use roomdesk_core::roles::Role;
use roomdesk_db::models::session::CreateSession;
use roomdesk_db::models::user::{CreateUser, User, UserResponse};
use roomdesk_db::repositories::{SessionRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::token::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/admin` and `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    pub password: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/change-password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Opaque bearer token for the `Authorization` header.
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Payload for `GET /auth/admin-exists`.
#[derive(Debug, Serialize)]
pub struct AdminExistsResponse {
    pub admin_exists: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/admin
///
/// Create the single admin account. Returns 409 once an admin exists.
pub async fn create_admin(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    input.validate()?;
    if UserRepo::admin_exists(&state.pool).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "An admin account already exists".into(),
        )));
    }

    // A racing second creation still trips the partial unique index.
    let user = insert_user(&state, input, Role::Admin, None).await?;
    Ok(ApiResponse::created(
        "Admin account created",
        UserResponse::from(&user),
    ))
}

/// GET /api/v1/auth/admin-exists
pub async fn admin_exists(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<AdminExistsResponse>>> {
    let exists = UserRepo::admin_exists(&state.pool).await?;
    Ok(ApiResponse::ok(
        "Admin existence checked",
        AdminExistsResponse {
            admin_exists: exists,
        },
    ))
}

/// POST /api/v1/auth/register
///
/// Self-service registration. The role is always Customer regardless of
/// anything the client sends.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    input.validate()?;
    let user = insert_user(&state, input, Role::Customer, None).await?;
    Ok(ApiResponse::created(
        "Registration successful",
        UserResponse::from(&user),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns an opaque bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let (plaintext, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::hours(state.config.session_expiry_hours);
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    Ok(ApiResponse::ok(
        "Login successful",
        LoginResponse {
            token: plaintext,
            expires_in: state.config.session_expiry_hours * 3600,
            user: UserResponse::from(&user),
        },
    ))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user.
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    Ok(ApiResponse::message("Logged out"))
}

/// POST /api/v1/auth/change-password
///
/// Requires the current password plus a matching confirmation.
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    if input.new_password != input.confirm_password {
        return Err(AppError::Core(CoreError::Validation(
            "New password and confirmation do not match".into(),
        )));
    }
    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    let current_valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Validation(
            "Current password is incorrect".into(),
        )));
    }

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, user.id, &new_hash).await?;

    Ok(ApiResponse::message("Password changed"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Hash the password and insert a user row with the given role.
pub(crate) async fn insert_user(
    state: &AppState,
    input: RegisterRequest,
    role: Role,
    staff_code: Option<String>,
) -> AppResult<User> {
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            phone: input.phone,
            address: input.address,
            staff_code,
            role,
            password_hash,
        },
    )
    .await?;
    Ok(user)
}
