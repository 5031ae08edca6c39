use crate::booking_flow::slot_catalog::TimeSlot;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotsResponse {
    booked_time_slots: Vec<TimeSlot>,
}

impl TimeSlotsResponse {
    pub fn booked_time_slots(&self) -> &[TimeSlot] { &self.booked_time_slots }
}

impl SerdeJSONBodyHTTPResponseType for TimeSlotsResponse {}
