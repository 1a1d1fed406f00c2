use crate::persistence::launch::{self, Customers};
use chrono::{DateTime, Utc};
use sea_orm::Set;

/// Flight number handed out when no launch has been stored yet.
pub const DEFAULT_FLIGHT_NUMBER: i32 = 100;
/// Target of launches that were not validated against the planet catalog.
pub const UNTARGETED: &str = "N/A";
/// Customers attached to every newly scheduled launch.
pub const DEFAULT_CUSTOMERS: [&str; 2] = ["Zero to Mastery", "NASA"];

/// A scheduled or historical launch, identified solely by its flight number.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Launch {
    pub flight_number: i32,
    pub mission: String,
    pub rocket: String,
    pub launch_date: DateTime<Utc>,
    /// Kepler name of the destination, or [`UNTARGETED`].
    pub target: String,
    pub customers: Vec<String>,
    pub upcoming: bool,
    pub success: bool,
}

impl From<launch::Model> for Launch {
    fn from(value: launch::Model) -> Self {
        Self {
            flight_number: value.flight_number,
            mission: value.mission,
            rocket: value.rocket,
            launch_date: value.launch_date,
            target: value.target,
            customers: value.customers.0,
            upcoming: value.upcoming,
            success: value.success,
        }
    }
}

impl From<Launch> for launch::ActiveModel {
    fn from(value: Launch) -> Self {
        Self {
            flight_number: Set(value.flight_number),
            mission: Set(value.mission),
            rocket: Set(value.rocket),
            launch_date: Set(value.launch_date),
            target: Set(value.target),
            customers: Set(Customers(value.customers)),
            upcoming: Set(value.upcoming),
            success: Set(value.success),
        }
    }
}

/// Untrusted scheduling input. Every field is optional here so that absence can be
/// reported as a typed error instead of a decoding failure.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub mission: Option<String>,
    pub rocket: Option<String>,
    pub launch_date: Option<String>,
    pub target: Option<String>,
}
