pub mod booking;
pub mod session;

pub use booking::{BookingRequest, BookingStatus, ServiceCategory};
pub use session::CallSession;
