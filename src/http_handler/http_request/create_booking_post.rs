use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::booking_flow::slot_catalog::TimeSlot;
use crate::http_handler::http_response::create_booking::CreateBookingResponse;
use chrono::NaiveDate;

/// `POST /bookings/create` – the fully assembled reservation payload.
///
/// Only ever constructed by the session once the selection is complete and
/// the contact details validate. The backend expects every new booking to
/// carry `status: "pending"`; staff approval flips it later, outside this
/// engine.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub room_id: String,
    pub date: NaiveDate,
    pub start_time: TimeSlot,
    pub end_time: TimeSlot,
    pub status: &'static str,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub equipment_ids: Vec<String>,
}

impl CreateBookingRequest {
    pub(crate) const PENDING: &'static str = "pending";
}

impl HTTPRequestType for CreateBookingRequest {
    type Response = CreateBookingResponse;
    type Body = Self;

    fn endpoint(&self) -> &'static str { "/bookings/create" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn body(&self) -> &Self::Body { self }
}
