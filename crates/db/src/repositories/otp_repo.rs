//! Repository for the `password_reset_otps` table.
//!
//! Verification and reset both operate on the most recently created row
//! for a user; see the password-reset handlers for the full flow.

use sqlx::PgPool;

use roomdesk_core::types::DbId;

use crate::models::otp::PasswordResetOtp;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, code, is_verified, created_at, updated_at";

/// Provides CRUD operations for password-reset OTPs.
pub struct OtpRepo;

impl OtpRepo {
    /// Insert a new unverified OTP, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        code: &str,
    ) -> Result<PasswordResetOtp, sqlx::Error> {
        let query = format!(
            "INSERT INTO password_reset_otps (user_id, code)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PasswordResetOtp>(&query)
            .bind(user_id)
            .bind(code)
            .fetch_one(pool)
            .await
    }

    /// The most recently created OTP for a user matching an exact code.
    pub async fn latest_for_user_and_code(
        pool: &PgPool,
        user_id: DbId,
        code: &str,
    ) -> Result<Option<PasswordResetOtp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM password_reset_otps
             WHERE user_id = $1 AND code = $2
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, PasswordResetOtp>(&query)
            .bind(user_id)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// The most recently created OTP for a user, regardless of code.
    pub async fn latest_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<PasswordResetOtp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM password_reset_otps
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, PasswordResetOtp>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark an OTP as verified.
    pub async fn mark_verified(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE password_reset_otps SET is_verified = true, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete a consumed OTP record.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM password_reset_otps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
