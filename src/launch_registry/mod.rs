//! Command/query surface for launch records.

mod launch;
mod launch_date;
mod registry;
mod schedule_error;
#[cfg(test)]
mod tests;

pub use launch::{DEFAULT_CUSTOMERS, DEFAULT_FLIGHT_NUMBER, Launch, LaunchRequest, UNTARGETED};
pub use launch_date::parse_launch_date;
pub use registry::LaunchRegistry;
pub use schedule_error::ScheduleError;
