use super::{SurveyError, SurveyRow};
use futures::{Stream, stream};
use std::{io, path::Path};

/// Opens the survey CSV at `path` as a lazy stream of rows.
///
/// Opening fails eagerly (missing file, unreadable header); decoding errors of individual
/// records are yielded in-stream.
pub fn read_survey(
    path: impl AsRef<Path>,
) -> Result<impl Stream<Item = Result<SurveyRow, SurveyError>>, SurveyError> {
    let reader = survey_reader_builder().from_path(path)?;
    Ok(stream::iter(reader.into_deserialize::<SurveyRow>().map(|row| row.map_err(SurveyError::from))))
}

/// Wraps any byte source holding survey CSV as a lazy stream of rows.
pub fn survey_rows<R: io::Read>(source: R) -> impl Stream<Item = Result<SurveyRow, SurveyError>> {
    let reader = survey_reader_builder().from_reader(source);
    stream::iter(reader.into_deserialize::<SurveyRow>().map(|row| row.map_err(SurveyError::from)))
}

fn survey_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // the survey export prefixes its column documentation with '#'
    builder.comment(Some(b'#')).trim(csv::Trim::All);
    builder
}
