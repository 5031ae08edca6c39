use super::request_common::{HTTPRequestMethod, HTTPRequestType};
use crate::http_handler::http_response::time_slots::TimeSlotsResponse;
use chrono::NaiveDate;

/// `GET /availability/time-slots` – booked slots for one (room, date) pair.
#[derive(Debug)]
pub struct TimeSlotsRequest {
    pub room_id: String,
    pub date: NaiveDate,
}

impl HTTPRequestType for TimeSlotsRequest {
    type Response = TimeSlotsResponse;
    type Body = ();

    fn endpoint(&self) -> &'static str { "/availability/time-slots" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn body(&self) -> &Self::Body { &() }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("date", self.date.format("%Y-%m-%d").to_string()),
            ("roomId", self.room_id.clone()),
        ]
    }
}
