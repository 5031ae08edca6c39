#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

pub mod booking_flow;
pub mod http_handler;
mod logger;
