use sea_orm::DbErr;
use std::fmt;

/// Failure of a planet filter pass as a whole.
///
/// Row-level write failures never surface here; they are logged and skipped.
#[derive(Debug)]
pub enum SurveyError {
    /// The survey source could not be read or a record could not be decoded.
    Csv(csv::Error),
    /// The final planet count could not be read back.
    Database(DbErr),
}

impl fmt::Display for SurveyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurveyError::Csv(e) => write!(f, "survey data unreadable: {e}"),
            SurveyError::Database(e) => write!(f, "planet store unavailable: {e}"),
        }
    }
}

impl std::error::Error for SurveyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurveyError::Csv(e) => Some(e),
            SurveyError::Database(e) => Some(e),
        }
    }
}

impl From<csv::Error> for SurveyError {
    fn from(value: csv::Error) -> Self { SurveyError::Csv(value) }
}

impl From<DbErr> for SurveyError {
    fn from(value: DbErr) -> Self { SurveyError::Database(value) }
}
