//! Row structs and DTOs, one module per table.

pub mod booking;
pub mod complaint;
pub mod facility;
pub mod notification;
pub mod otp;
pub mod room;
pub mod session;
pub mod user;
