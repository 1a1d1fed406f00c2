//! Habitable planet catalog: survey ingestion, the habitability predicate and planet lookups.

mod catalog;
mod survey_error;
mod survey_reader;
mod survey_row;
#[cfg(test)]
mod tests;

pub use catalog::{Planet, PlanetCatalog};
pub use survey_error::SurveyError;
pub use survey_reader::{read_survey, survey_rows};
pub use survey_row::SurveyRow;
