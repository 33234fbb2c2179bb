//! Handlers for the OTP-based password reset flow.
//!
//! Request emails a 6-digit code; verify checks the most recent row for
//! that exact code against the 2-minute TTL; reset consumes the most
//! recent row for the user once it has been verified.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use roomdesk_core::error::CoreError;
use roomdesk_core::otp;
use roomdesk_db::repositories::{OtpRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::notify::send_email;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /auth/password-reset/request`.
#[derive(Debug, Deserialize)]
pub struct ResetRequestBody {
    pub username: String,
}

/// Request body for `POST /auth/password-reset/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyBody {
    pub username: String,
    pub code: String,
}

/// Request body for `POST /auth/password-reset/reset`.
#[derive(Debug, Deserialize)]
pub struct ResetBody {
    pub username: String,
    pub new_password: String,
}

/// POST /api/v1/auth/password-reset/request
///
/// Generate a code, persist it unverified, and email it to the user.
pub async fn request_reset(
    State(state): State<AppState>,
    Json(input): Json<ResetRequestBody>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::UnknownEntity("User")))?;

    let code = otp::generate_code();
    OtpRepo::create(&state.pool, user.id, &code).await?;

    let body = format!(
        "Your password reset code is {code}. It expires in {} seconds.",
        otp::OTP_TTL_SECS
    );
    send_email(&state, &user, "Password reset code", &body).await?;

    Ok(ApiResponse::message("Password reset code sent"))
}

/// POST /api/v1/auth/password-reset/verify
///
/// Check the most recent OTP matching the submitted code. 400 when the
/// code is unknown or older than the TTL.
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(input): Json<VerifyBody>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::UnknownEntity("User")))?;

    let record = OtpRepo::latest_for_user_and_code(&state.pool, user.id, &input.code)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Validation("Invalid code".into())))?;

    if otp::is_expired(record.created_at, Utc::now()) {
        return Err(AppError::Core(CoreError::Validation(
            "Code has expired".into(),
        )));
    }

    OtpRepo::mark_verified(&state.pool, record.id).await?;
    Ok(ApiResponse::message("Code verified"))
}

/// POST /api/v1/auth/password-reset/reset
///
/// Consume the most recently created OTP for the user. It must have been
/// verified; the row is deleted on success so it cannot be reused.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(input): Json<ResetBody>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::UnknownEntity("User")))?;

    let record = OtpRepo::latest_for_user(&state.pool, user.id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation("No reset request found".into()))
        })?;

    if !record.is_verified {
        return Err(AppError::Core(CoreError::Validation(
            "Code has not been verified".into(),
        )));
    }

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    UserRepo::update_password(&state.pool, user.id, &new_hash).await?;
    OtpRepo::delete(&state.pool, record.id).await?;

    Ok(ApiResponse::message("Password reset"))
}
