pub mod booking;
pub mod proposals;
