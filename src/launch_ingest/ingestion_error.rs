use crate::http_handler::http_response::response_common::ResponseError;
use sea_orm::DbErr;
use std::fmt;

/// Failure of the launch import. Always fatal to startup.
#[derive(Debug)]
pub enum IngestionError {
    /// The catalog answered with anything but `200 OK`, or could not be reached or decoded.
    Catalog(ResponseError),
    /// Probing or writing the launch store failed.
    Database(DbErr),
}

impl fmt::Display for IngestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestionError::Catalog(ResponseError::UnexpectedStatus(status)) => {
                write!(f, "launch data download failed with status {status}")
            }
            IngestionError::Catalog(e) => write!(f, "launch data download failed: {e}"),
            IngestionError::Database(e) => write!(f, "launch data could not be stored: {e}"),
        }
    }
}

impl std::error::Error for IngestionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestionError::Catalog(e) => Some(e),
            IngestionError::Database(e) => Some(e),
        }
    }
}

impl From<ResponseError> for IngestionError {
    fn from(value: ResponseError) -> Self { IngestionError::Catalog(value) }
}

impl From<DbErr> for IngestionError {
    fn from(value: DbErr) -> Self { IngestionError::Database(value) }
}
