//! One-time password generation and expiry rules for password reset.

use rand::Rng;

use crate::types::Timestamp;

/// OTP time-to-live: codes expire exactly two minutes after creation.
pub const OTP_TTL_SECS: i64 = 120;

/// Generate a uniformly random 6-digit numeric code.
///
/// Collisions across users or over time are acceptable; codes are
/// scoped to a user and a 2-minute window.
pub fn generate_code() -> String {
    rand::rng().random_range(100_000..=999_999).to_string()
}

/// Has an OTP created at `created_at` expired as of `now`?
pub fn is_expired(created_at: Timestamp, now: Timestamp) -> bool {
    now > created_at + chrono::Duration::seconds(OTP_TTL_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_generated_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), 6, "code must be six digits, got {code}");
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            // No leading zero: codes are drawn from 100000..=999999.
            assert_ne!(code.as_bytes()[0], b'0');
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let created = Utc::now();

        // 119 seconds after creation: still valid.
        assert!(!is_expired(created, created + Duration::seconds(119)));
        // Exactly at the TTL: still valid (expiry is strictly after).
        assert!(!is_expired(created, created + Duration::seconds(120)));
        // 121 seconds after creation: expired.
        assert!(is_expired(created, created + Duration::seconds(121)));
    }
}
