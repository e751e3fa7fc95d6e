pub mod booking;
pub mod page;
