pub mod create_booking;
pub mod equipments;
pub mod month_availability;
pub(crate) mod response_common;
pub mod time_slots;
