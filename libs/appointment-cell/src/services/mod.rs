pub mod availability;
pub mod booking;
pub mod store;

pub use availability::{available_slots, weekday_abbreviation};
pub use booking::BookingService;
pub use store::AppointmentStore;
