use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::http_response::equipments::EquipmentsResponse;

/// `GET /equipments` – the inventory for the optional equipment multi-select.
#[derive(Debug)]
pub struct EquipmentsRequest {}

impl HTTPRequestType for EquipmentsRequest {
    type Response = EquipmentsResponse;
    type Body = ();

    fn endpoint(&self) -> &'static str { "/equipments" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn body(&self) -> &Self::Body { &() }
}
