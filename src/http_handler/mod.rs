pub mod http_client;
pub mod http_request;
pub mod http_response;
mod http_handler_common;

pub use http_handler_common::{Equipment, HTTPError};
