//! Booking state machine, date-range overlap logic, and pricing math.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Lifecycle state of a booking.
///
/// A single tagged state instead of independent `is_approved` /
/// `is_rejected` flags, so the both-true combination is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    /// The value stored in the `bookings.status` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
        }
    }

    /// Decode a stored status value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "approved" => Some(BookingStatus::Approved),
            "rejected" => Some(BookingStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable label used in booking list responses.
    pub const fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Rejected => "Rejected",
        }
    }
}

/// An admin decision on a pending booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Approve,
    Reject,
}

impl BookingAction {
    /// Parse the `action` request field. Anything other than `approve`
    /// or `reject` is invalid.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "approve" => Some(BookingAction::Approve),
            "reject" => Some(BookingAction::Reject),
            _ => None,
        }
    }
}

/// Do two half-open date ranges `[a_in, a_out)` and `[b_in, b_out)`
/// intersect?
///
/// Back-to-back stays (one checking out the day the other checks in)
/// do not overlap.
pub fn ranges_overlap(a_in: Date, a_out: Date, b_in: Date, b_out: Date) -> bool {
    a_in < b_out && a_out > b_in
}

/// Validate a requested stay: check-out must be strictly after check-in.
pub fn validate_stay(check_in: Date, check_out: Date) -> Result<(), CoreError> {
    if check_out <= check_in {
        return Err(CoreError::Validation(
            "Check-out must be after check-in".to_string(),
        ));
    }
    Ok(())
}

/// Number of nights between check-in and check-out.
pub fn nights(check_in: Date, check_out: Date) -> i64 {
    (check_out - check_in).num_days()
}

/// Total price for a stay: nightly price times the number of nights.
pub fn total_price(nightly_price: i64, check_in: Date, check_out: Date) -> i64 {
    nightly_price * nights(check_in, check_out)
}
