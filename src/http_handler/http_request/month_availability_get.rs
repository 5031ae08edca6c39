use super::request_common::{HTTPRequestMethod, HTTPRequestType, RequestError};
use crate::http_handler::http_response::month_availability::MonthAvailabilityResponse;

/// `GET /availability/month` – which days of a month are fully booked for a room.
///
/// The backend accepts the request without a `roomId`, but the engine always
/// scopes it to the room currently being booked.
#[derive(Debug)]
pub struct MonthAvailabilityRequest {
    room_id: String,
    month: u32,
    year: i32,
}

impl MonthAvailabilityRequest {
    pub fn new(room_id: &str, month: u32, year: i32) -> Result<Self, RequestError> {
        if !(1..=12).contains(&month) {
            return Err(RequestError::InvalidMonth(month));
        }
        Ok(Self { room_id: String::from(room_id), month, year })
    }
}

impl HTTPRequestType for MonthAvailabilityRequest {
    type Response = MonthAvailabilityResponse;
    type Body = ();

    fn endpoint(&self) -> &'static str { "/availability/month" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn body(&self) -> &Self::Body { &() }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("month", self.month.to_string()),
            ("year", self.year.to_string()),
            ("roomId", self.room_id.clone()),
        ]
    }
}
