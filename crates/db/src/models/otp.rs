//! Password-reset OTP model.

use sqlx::FromRow;

use roomdesk_core::types::{DbId, Timestamp};

/// A row from the `password_reset_otps` table.
#[derive(Debug, Clone, FromRow)]
pub struct PasswordResetOtp {
    pub id: DbId,
    pub user_id: DbId,
    pub code: String,
    pub is_verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
