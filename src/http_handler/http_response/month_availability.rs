use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MonthAvailabilityResponse {
    fully_booked_dates: HashMap<String, DayOccupancy>,
}

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DayOccupancy {
    is_fully_booked: bool,
}

impl MonthAvailabilityResponse {
    /// Resolves the reported map into calendar-day values. Keys arrive as
    /// `YYYY-MM-DD` strings and are parsed into `NaiveDate` so disabled-day
    /// lookups never go through locale- or zone-dependent formatting.
    pub fn fully_booked_days(&self) -> Result<HashSet<NaiveDate>, chrono::ParseError> {
        let mut days = HashSet::new();
        for (date_str, occupancy) in &self.fully_booked_dates {
            if occupancy.is_fully_booked {
                days.insert(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?);
            }
        }
        Ok(days)
    }
}

impl SerdeJSONBodyHTTPResponseType for MonthAvailabilityResponse {}

#[cfg(test)]
impl MonthAvailabilityResponse {
    pub(crate) fn test(entries: &[(&str, bool)]) -> Self {
        Self {
            fully_booked_dates: entries
                .iter()
                .map(|(d, b)| (String::from(*d), DayOccupancy { is_fully_booked: *b }))
                .collect(),
        }
    }
}
