//! Domain types and pure logic for the room-booking backend.
//!
//! This crate is database- and HTTP-free: the booking date math, OTP
//! lifecycle rules, role policy, and error taxonomy live here so the
//! `db` and `api` crates can share them.

pub mod booking;
pub mod error;
pub mod otp;
pub mod roles;
pub mod types;
