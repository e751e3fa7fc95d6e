pub mod appointment;
pub mod booking;
pub mod customer;

pub use appointment::{AppointmentTime, NewAppointment};
pub use booking::NewBooking;
pub use customer::{CustomerId, CustomerIdRow, NewCustomer};
