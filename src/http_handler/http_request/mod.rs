pub mod create_booking_post;
pub mod equipments_get;
pub mod month_availability_get;
pub mod request_common;
pub mod time_slots_get;
