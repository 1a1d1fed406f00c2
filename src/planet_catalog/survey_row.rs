/// Disposition value marking a survey entry as a confirmed planet.
const CONFIRMED: &str = "CONFIRMED";
/// Exclusive lower bound of the insolation flux (in earth flux units).
const MIN_INSOLATION_FLUX: f64 = 0.36;
/// Exclusive upper bound of the insolation flux (in earth flux units).
const MAX_INSOLATION_FLUX: f64 = 1.11;
/// Exclusive upper bound of the planetary radius (in earth radii).
const MAX_PLANETARY_RADIUS: f64 = 1.6;

/// A single row of the Kepler objects-of-interest survey.
///
/// Only the columns relevant to habitability are decoded; all other columns are ignored.
/// Numeric columns are empty or unreadable for some objects and decode to `None`, which
/// fails the habitability predicate.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SurveyRow {
    #[serde(rename = "koi_disposition")]
    pub disposition: String,
    #[serde(rename = "koi_insol", deserialize_with = "csv::invalid_option")]
    pub insolation_flux: Option<f64>,
    #[serde(rename = "koi_prad", deserialize_with = "csv::invalid_option")]
    pub planetary_radius: Option<f64>,
    #[serde(rename = "kepler_name", default)]
    pub kepler_name: String,
}

impl SurveyRow {
    /// Habitability predicate. All bounds are strict and a missing measurement never passes.
    pub fn is_habitable(&self) -> bool {
        self.disposition == CONFIRMED
            && self
                .insolation_flux
                .is_some_and(|flux| flux > MIN_INSOLATION_FLUX && flux < MAX_INSOLATION_FLUX)
            && self.planetary_radius.is_some_and(|radius| radius < MAX_PLANETARY_RADIUS)
    }
}
