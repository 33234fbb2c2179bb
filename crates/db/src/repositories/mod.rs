//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod complaint_repo;
pub mod facility_repo;
pub mod notification_repo;
pub mod otp_repo;
pub mod room_repo;
pub mod session_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use complaint_repo::ComplaintRepo;
pub use facility_repo::FacilityRepo;
pub use notification_repo::NotificationRepo;
pub use otp_repo::OtpRepo;
pub use room_repo::RoomRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
