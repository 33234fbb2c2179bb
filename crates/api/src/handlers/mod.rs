//! HTTP handlers, one module per resource.

pub mod auth;
pub mod booking;
pub mod complaint;
pub mod facility;
pub mod notification;
pub mod notify;
pub mod password_reset;
pub mod room;
pub mod users;
