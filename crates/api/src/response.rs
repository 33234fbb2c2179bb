//! Shared response envelope for API handlers.
//!
//! Every endpoint returns `{ "success": ..., "message": ..., "data": ...,
//! "errors": ... }`. Use [`ApiResponse`] instead of ad-hoc
//! `serde_json::json!` blocks to keep the envelope consistent.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Standard response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub errors: Option<serde_json::Value>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
        })
    }

    /// 201 Created with a payload.
    pub fn created(message: impl Into<String>, data: T) -> (StatusCode, Json<Self>) {
        (
            StatusCode::CREATED,
            Json(Self {
                success: true,
                message: message.into(),
                data: Some(data),
                errors: None,
            }),
        )
    }
}

impl ApiResponse<serde_json::Value> {
    /// 200 OK with no payload.
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
            data: None,
            errors: None,
        })
    }
}
