//! Page components, one per route.

pub mod batches;
pub mod checkin;
pub mod dashboard;
pub mod login;
pub mod messaging;
pub mod register;
pub mod reports;
pub mod students;
