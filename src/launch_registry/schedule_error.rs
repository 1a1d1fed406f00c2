use sea_orm::DbErr;
use std::fmt;

/// Reasons a launch could not be scheduled.
///
/// All variants but `Database` are caused by the request and can be corrected by the caller.
#[derive(Debug)]
pub enum ScheduleError {
    /// A required request field is absent or empty. Carries the field name.
    MissingField(&'static str),
    /// The launch date is not a real calendar date. Carries the raw input.
    InvalidDate(String),
    /// No stored planet matches the requested target.
    TargetNotFound(String),
    Database(DbErr),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::MissingField(field) => write!(f, "missing required launch property {field}"),
            ScheduleError::InvalidDate(raw) => write!(f, "invalid launch date {raw:?}"),
            ScheduleError::TargetNotFound(target) => write!(f, "matching planet not found: {target}"),
            ScheduleError::Database(e) => write!(f, "launch store unavailable: {e}"),
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DbErr> for ScheduleError {
    fn from(value: DbErr) -> Self { ScheduleError::Database(value) }
}
