use crate::http_handler::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::month_availability_get::MonthAvailabilityRequest;
use crate::http_handler::http_request::request_common::HTTPRequestType;
use crate::{error, event};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use strum_macros::Display;

/// The calendar month currently shown, as a plain (year, month) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewedMonth {
    year: i32,
    month: u32,
}

impl ViewedMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn year(self) -> i32 { self.year }
    pub fn month(self) -> u32 { self.month }

    /// The month shown after one click on the back arrow.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// The month shown after one click on the forward arrow.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for ViewedMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// How a single calendar day should be treated by the consuming surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAvailability {
    Open,
    FullyBooked,
    /// No month data is loaded (fresh view, failed fetch, or invalidated
    /// after a booking). Never rendered as "all days open".
    Unknown,
}

#[derive(Debug, Display)]
pub enum MonthLoadError {
    Fetch(HTTPError),
    /// A `fullyBookedDates` key did not parse as `YYYY-MM-DD`.
    MalformedDate(chrono::ParseError),
}

impl std::error::Error for MonthLoadError {}

#[derive(Debug, PartialEq, Eq)]
enum MonthState {
    Unknown,
    Loaded(HashSet<NaiveDate>),
}

/// Owner of the disabled-date set for the viewed (room, month) pair.
///
/// Each refresh replaces the whole set; there is no incremental merge.
/// Changing the room or the viewed month drops straight back to `Unknown`
/// until the next refresh, as does a successful booking inside the viewed
/// month.
#[derive(Debug)]
pub struct MonthAvailability {
    room_id: String,
    viewed: ViewedMonth,
    state: MonthState,
}

impl MonthAvailability {
    pub fn new(room_id: &str, viewed: ViewedMonth) -> Self {
        Self { room_id: String::from(room_id), viewed, state: MonthState::Unknown }
    }

    pub fn room_id(&self) -> &str { &self.room_id }
    pub fn viewed(&self) -> ViewedMonth { self.viewed }
    pub fn is_loaded(&self) -> bool { matches!(self.state, MonthState::Loaded(_)) }

    /// Switches the viewed month. Previous data is discarded, not carried over.
    pub fn show_month(&mut self, month: ViewedMonth) {
        if month != self.viewed {
            self.viewed = month;
            self.state = MonthState::Unknown;
        }
    }

    /// Retargets the loader to another room and forgets everything loaded.
    pub fn set_room(&mut self, room_id: &str) {
        if room_id != self.room_id {
            self.room_id = String::from(room_id);
            self.state = MonthState::Unknown;
        }
    }

    /// Fetches full-day occupancy for the viewed (room, month) pair and
    /// replaces the disabled-date set. On any failure the set becomes
    /// `Unknown`; the caller surfaces the returned error as a dismissible
    /// notice and may retry.
    pub async fn refresh(&mut self, client: &HTTPClient) -> Result<(), MonthLoadError> {
        let request =
            MonthAvailabilityRequest::new(&self.room_id, self.viewed.month, self.viewed.year)
                .expect("viewed month is always in 1..=12");
        let response = match request.send_request(client).await {
            Ok(response) => response,
            Err(e) => {
                self.state = MonthState::Unknown;
                error!("Could not load availability for {}: {e}", self.viewed);
                return Err(MonthLoadError::Fetch(e));
            }
        };
        match response.fully_booked_days() {
            Ok(days) => {
                event!("Month {} has {} fully booked day(s)", self.viewed, days.len());
                self.state = MonthState::Loaded(days);
                Ok(())
            }
            Err(e) => {
                self.state = MonthState::Unknown;
                error!("Malformed date key in month availability response: {e}");
                Err(MonthLoadError::MalformedDate(e))
            }
        }
    }

    /// Day lookup keyed by calendar-day value, never by formatted string.
    pub fn day_availability(&self, date: NaiveDate) -> DayAvailability {
        match &self.state {
            MonthState::Unknown => DayAvailability::Unknown,
            MonthState::Loaded(days) => {
                if days.contains(&date) {
                    DayAvailability::FullyBooked
                } else {
                    DayAvailability::Open
                }
            }
        }
    }

    /// Drops the cached set if `date` falls inside the viewed month, so the
    /// next view refetches occupancy that a fresh booking just changed.
    pub fn invalidate_if_contains(&mut self, date: NaiveDate) {
        if self.viewed.contains(date) {
            self.state = MonthState::Unknown;
        }
    }

    #[cfg(test)]
    pub(crate) fn load_for_test(&mut self, days: &[NaiveDate]) {
        self.state = MonthState::Loaded(days.iter().copied().collect());
    }
}
