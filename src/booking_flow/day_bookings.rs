use super::slot_catalog::TimeSlot;
use crate::http_handler::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::request_common::HTTPRequestType;
use crate::http_handler::http_request::time_slots_get::TimeSlotsRequest;
use chrono::NaiveDate;
use std::collections::HashSet;

/// The slots already reserved for one (room, day) pair. Fetched fresh every
/// time a day is opened and never merged across days.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookedSlotSet {
    slots: HashSet<TimeSlot>,
}

impl BookedSlotSet {
    pub fn new() -> Self { Self::default() }

    pub fn contains(&self, slot: TimeSlot) -> bool { self.slots.contains(&slot) }
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }
    pub fn len(&self) -> usize { self.slots.len() }

    /// Whether any slot in the inclusive span between `a` and `b` is booked,
    /// in either argument order.
    pub fn blocks_span(&self, a: TimeSlot, b: TimeSlot) -> bool {
        TimeSlot::span(a, b).any(|slot| self.contains(slot))
    }
}

impl FromIterator<TimeSlot> for BookedSlotSet {
    fn from_iter<I: IntoIterator<Item = TimeSlot>>(iter: I) -> Self {
        Self { slots: iter.into_iter().collect() }
    }
}

/// Fetches the booked slots for `date` in the given room.
pub async fn fetch_booked_slots(
    client: &HTTPClient,
    room_id: &str,
    date: NaiveDate,
) -> Result<BookedSlotSet, HTTPError> {
    let request = TimeSlotsRequest { room_id: String::from(room_id), date };
    let response = request.send_request(client).await?;
    Ok(response.booked_time_slots().iter().copied().collect())
}
