use super::{PlanetCatalog, SurveyError, SurveyRow, survey_rows};
use crate::persistence::open_in_memory;
use futures::stream;

const SURVEY_CSV: &str = "\
# This file was produced by the NASA Exoplanet Archive
# COLUMN kepid:          KepID
# COLUMN koi_disposition: Exoplanet Archive Disposition
kepid,kepoi_name,kepler_name,koi_disposition,koi_insol,koi_prad
10797460,K00752.01,Kepler-227 b,CONFIRMED,93.59,2.26
9967884,K00780.02,Kepler-442 b,CONFIRMED,0.70,1.34
10854555,K00755.01,Kepler-1652 b,CONFIRMED,0.84,1.60
6521045,K00041.02,Kepler-62 f,CONFIRMED,0.41,1.41
11391957,K00701.04,,FALSE POSITIVE,0.50,1.00
4138008,K01593.01,Kepler-296 e,CANDIDATE,0.97,1.53
8311864,K01422.02,Kepler-1410 b,CONFIRMED,,1.39
";

fn row(disposition: &str, flux: f64, radius: f64) -> SurveyRow {
    SurveyRow {
        disposition: disposition.to_string(),
        insolation_flux: Some(flux),
        planetary_radius: Some(radius),
        kepler_name: "Kepler-442 b".to_string(),
    }
}

fn named(name: &str) -> SurveyRow {
    SurveyRow { kepler_name: name.to_string(), ..row("CONFIRMED", 0.7, 1.3) }
}

#[test]
fn test_habitable_flux_bounds_are_exclusive() {
    assert!(!row("CONFIRMED", 0.36, 1.0).is_habitable());
    assert!(!row("CONFIRMED", 1.11, 1.0).is_habitable());
    assert!(row("CONFIRMED", 0.3601, 1.0).is_habitable());
    assert!(row("CONFIRMED", 1.1099, 1.0).is_habitable());
    assert!(!row("CONFIRMED", 0.3599, 1.0).is_habitable());
    assert!(!row("CONFIRMED", 1.1101, 1.0).is_habitable());
}

#[test]
fn test_habitable_radius_bound_is_exclusive() {
    assert!(!row("CONFIRMED", 0.7, 1.6).is_habitable());
    assert!(row("CONFIRMED", 0.7, 1.5999).is_habitable());
    assert!(!row("CONFIRMED", 0.7, 1.6001).is_habitable());
    // no lower bound on the radius
    assert!(row("CONFIRMED", 0.7, 0.0).is_habitable());
}

#[test]
fn test_habitable_requires_confirmed_disposition() {
    assert!(!row("CANDIDATE", 0.7, 1.0).is_habitable());
    assert!(!row("FALSE POSITIVE", 0.7, 1.0).is_habitable());
    assert!(!row("confirmed", 0.7, 1.0).is_habitable());
}

#[test]
fn test_missing_measurements_are_not_habitable() {
    let no_flux = SurveyRow { insolation_flux: None, ..row("CONFIRMED", 0.7, 1.0) };
    let no_radius = SurveyRow { planetary_radius: None, ..row("CONFIRMED", 0.7, 1.0) };
    assert!(!no_flux.is_habitable());
    assert!(!no_radius.is_habitable());
    assert!(!row("CONFIRMED", f64::NAN, 1.0).is_habitable());
}

#[tokio::test]
async fn test_filter_and_load_stores_only_habitable_rows() {
    let catalog = PlanetCatalog::new(open_in_memory().await);

    let stored = catalog.filter_and_load(survey_rows(SURVEY_CSV.as_bytes())).await.unwrap();

    assert_eq!(stored, 2);
    let names: Vec<String> =
        catalog.list().await.unwrap().into_iter().map(|p| p.kepler_name).collect();
    assert_eq!(names, vec!["Kepler-442 b".to_string(), "Kepler-62 f".to_string()]);
    assert!(catalog.exists("Kepler-442 b").await.unwrap());
    assert!(!catalog.exists("Kepler-1652 b").await.unwrap());
}

#[tokio::test]
async fn test_filter_and_load_is_idempotent() {
    let catalog = PlanetCatalog::new(open_in_memory().await);

    let first = catalog.filter_and_load(survey_rows(SURVEY_CSV.as_bytes())).await.unwrap();
    let count_after_first = catalog.count().await.unwrap();
    let second = catalog.filter_and_load(survey_rows(SURVEY_CSV.as_bytes())).await.unwrap();
    let count_after_second = catalog.count().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(count_after_first, 2);
    assert_eq!(count_after_first, count_after_second);
}

#[tokio::test]
async fn test_duplicate_rows_in_one_pass_collapse() {
    let catalog = PlanetCatalog::new(open_in_memory().await);
    let rows = (0..40)
        .map(|i| Ok::<_, SurveyError>(named(if i % 2 == 0 { "Kepler-442 b" } else { "Kepler-62 f" })));

    let stored = catalog.filter_and_load(stream::iter(rows)).await.unwrap();

    assert_eq!(stored, 40);
    assert_eq!(catalog.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_habitable_row_without_name_is_skipped() {
    let catalog = PlanetCatalog::new(open_in_memory().await);
    let rows: Vec<Result<SurveyRow, SurveyError>> = vec![Ok(named("")), Ok(named("Kepler-1229 b"))];

    let stored = catalog.filter_and_load(stream::iter(rows)).await.unwrap();

    assert_eq!(stored, 1);
    assert_eq!(catalog.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_unreadable_measurements_fail_the_predicate_only() {
    let catalog = PlanetCatalog::new(open_in_memory().await);
    let survey = "kepler_name,koi_disposition,koi_insol,koi_prad
Kepler-1 b,CANDIDATE,n/a,1.34
Kepler-22 b,CONFIRMED,bright,1.34
Kepler-62 f,CONFIRMED,0.41,huge
Kepler-442 b,CONFIRMED,0.70,1.34
";

    let stored = catalog.filter_and_load(survey_rows(survey.as_bytes())).await.unwrap();

    assert_eq!(stored, 1);
    let names: Vec<String> =
        catalog.list().await.unwrap().into_iter().map(|p| p.kepler_name).collect();
    assert_eq!(names, vec!["Kepler-442 b".to_string()]);
}

#[tokio::test]
async fn test_malformed_record_fails_the_pass() {
    let catalog = PlanetCatalog::new(open_in_memory().await);
    let broken = "kepler_name,koi_disposition,koi_insol,koi_prad\nKepler-442 b,CONFIRMED\n";

    let result = catalog.filter_and_load(survey_rows(broken.as_bytes())).await;

    assert!(matches!(result, Err(SurveyError::Csv(_))));
}
