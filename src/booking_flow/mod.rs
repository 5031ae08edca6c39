mod contact;
mod context;
mod day_bookings;
mod month_availability;
mod selection;
mod session;
pub mod slot_catalog;
#[cfg(test)]
mod tests;

pub use contact::{ContactDetails, ContactErrors};
pub use context::BookingContext;
pub use day_bookings::{BookedSlotSet, fetch_booked_slots};
pub use month_availability::{DayAvailability, MonthAvailability, MonthLoadError, ViewedMonth};
pub use selection::{SelectOutcome, Selection};
pub use session::{
    BookingSession, DayState, DayTicket, Navigate, OpenDayError, SlotClickError, SubmitError,
};
pub use slot_catalog::TimeSlot;
