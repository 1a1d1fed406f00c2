use super::{DEFAULT_FLIGHT_NUMBER, Launch, LaunchRegistry, LaunchRequest, ScheduleError, UNTARGETED};
use crate::persistence::open_in_memory;
use crate::planet_catalog::{PlanetCatalog, SurveyError, SurveyRow};
use chrono::{TimeZone, Utc};
use futures::stream;
use sea_orm::DbErr;
use std::sync::Arc;

async fn registry_with_planets(names: &[&str]) -> LaunchRegistry {
    let ctx = open_in_memory().await;
    let planets = Arc::new(PlanetCatalog::new(Arc::clone(&ctx)));
    let rows: Vec<Result<SurveyRow, SurveyError>> = names
        .iter()
        .map(|name| {
            Ok(SurveyRow {
                disposition: "CONFIRMED".to_string(),
                insolation_flux: Some(0.7),
                planetary_radius: Some(1.3),
                kepler_name: (*name).to_string(),
            })
        })
        .collect();
    planets.filter_and_load(stream::iter(rows)).await.unwrap();
    LaunchRegistry::new(ctx, planets)
}

fn historical(flight_number: i32) -> Launch {
    Launch {
        flight_number,
        mission: format!("Mission {flight_number}"),
        rocket: "Falcon 9".to_string(),
        launch_date: Utc.with_ymd_and_hms(2020, 5, 30, 19, 22, 0).unwrap(),
        target: UNTARGETED.to_string(),
        customers: vec!["NASA".to_string()],
        upcoming: false,
        success: true,
    }
}

fn enterprise_request() -> LaunchRequest {
    LaunchRequest {
        mission: Some("USS Enterprise".to_string()),
        rocket: Some("NCC 1701-D".to_string()),
        launch_date: Some("January 4, 2028".to_string()),
        target: Some("Kepler-442 b".to_string()),
    }
}

#[tokio::test]
async fn test_next_flight_number_sequence() {
    let registry = registry_with_planets(&[]).await;
    assert_eq!(registry.next_flight_number().await.unwrap(), DEFAULT_FLIGHT_NUMBER);

    registry.save(historical(100)).await.unwrap();
    assert_eq!(registry.next_flight_number().await.unwrap(), 101);

    registry.save(historical(7)).await.unwrap();
    assert_eq!(registry.next_flight_number().await.unwrap(), 101);
}

#[tokio::test]
async fn test_next_flight_number_does_not_overflow() {
    let registry = registry_with_planets(&["Kepler-442 b"]).await;
    registry.save(historical(i32::MAX)).await.unwrap();

    assert!(matches!(registry.next_flight_number().await, Err(DbErr::Custom(_))));
    assert!(matches!(
        registry.schedule(enterprise_request()).await,
        Err(ScheduleError::Database(DbErr::Custom(_)))
    ));
}

#[tokio::test]
async fn test_save_replaces_by_flight_number() {
    let registry = registry_with_planets(&[]).await;
    registry.save(historical(42)).await.unwrap();

    let replacement = Launch { mission: "Renamed".to_string(), ..historical(42) };
    registry.save(replacement.clone()).await.unwrap();

    let all = registry.list(0, None).await.unwrap();
    assert_eq!(all, vec![replacement]);
}

#[tokio::test]
async fn test_schedule_valid_launch() {
    let registry = registry_with_planets(&["Kepler-442 b"]).await;

    let launch = registry.schedule(enterprise_request()).await.unwrap();

    assert_eq!(launch.flight_number, DEFAULT_FLIGHT_NUMBER);
    assert_eq!(launch.mission, "USS Enterprise");
    assert_eq!(launch.rocket, "NCC 1701-D");
    assert_eq!(launch.target, "Kepler-442 b");
    assert_eq!(launch.launch_date, Utc.with_ymd_and_hms(2028, 1, 4, 0, 0, 0).unwrap());
    assert_eq!(launch.customers, vec!["Zero to Mastery".to_string(), "NASA".to_string()]);
    assert!(launch.upcoming);
    assert!(launch.success);
    assert_eq!(registry.find(launch.flight_number).await.unwrap(), Some(launch));
}

#[tokio::test]
async fn test_schedule_follows_latest_flight_number() {
    let registry = registry_with_planets(&["Kepler-442 b"]).await;
    registry.save(historical(187)).await.unwrap();

    let first = registry.schedule(enterprise_request()).await.unwrap();
    let second = registry.schedule(enterprise_request()).await.unwrap();

    assert_eq!(first.flight_number, 188);
    assert_eq!(second.flight_number, 189);
}

#[tokio::test]
async fn test_schedule_missing_field() {
    let registry = registry_with_planets(&["Kepler-442 b"]).await;

    let no_target = LaunchRequest { target: None, ..enterprise_request() };
    let blank_mission = LaunchRequest { mission: Some("  ".to_string()), ..enterprise_request() };

    assert!(matches!(
        registry.schedule(no_target).await,
        Err(ScheduleError::MissingField("target"))
    ));
    assert!(matches!(
        registry.schedule(blank_mission).await,
        Err(ScheduleError::MissingField("mission"))
    ));
    assert!(registry.list(0, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_schedule_invalid_date() {
    let registry = registry_with_planets(&["Kepler-442 b"]).await;
    let request =
        LaunchRequest { launch_date: Some("I am not a date".to_string()), ..enterprise_request() };

    let result = registry.schedule(request).await;

    assert!(matches!(result, Err(ScheduleError::InvalidDate(raw)) if raw == "I am not a date"));
}

#[tokio::test]
async fn test_schedule_unknown_target() {
    let registry = registry_with_planets(&["Kepler-62 f"]).await;

    let result = registry.schedule(enterprise_request()).await;

    assert!(matches!(result, Err(ScheduleError::TargetNotFound(target)) if target == "Kepler-442 b"));
    assert_eq!(registry.next_flight_number().await.unwrap(), DEFAULT_FLIGHT_NUMBER);
}

#[tokio::test]
async fn test_abort_existing_launch() {
    let registry = registry_with_planets(&["Kepler-442 b"]).await;
    let launch = registry.schedule(enterprise_request()).await.unwrap();

    assert!(registry.abort(launch.flight_number).await.unwrap());

    let aborted = registry.find(launch.flight_number).await.unwrap().unwrap();
    assert!(!aborted.upcoming);
    assert!(!aborted.success);
    assert_eq!(aborted.mission, launch.mission);
    // nothing left to modify on a second abort
    assert!(!registry.abort(launch.flight_number).await.unwrap());
}

#[tokio::test]
async fn test_abort_unknown_launch() {
    let registry = registry_with_planets(&[]).await;
    registry.save(historical(5)).await.unwrap();

    assert!(!registry.abort(6).await.unwrap());
    assert!(!registry.exists(6).await.unwrap());
    assert_eq!(registry.find(5).await.unwrap(), Some(historical(5)));
}

#[tokio::test]
async fn test_flight_numbers_are_not_reused_after_abort() {
    let registry = registry_with_planets(&["Kepler-442 b"]).await;
    let first = registry.schedule(enterprise_request()).await.unwrap();
    registry.abort(first.flight_number).await.unwrap();

    let second = registry.schedule(enterprise_request()).await.unwrap();

    assert_eq!(second.flight_number, first.flight_number + 1);
}

#[tokio::test]
async fn test_list_orders_by_flight_number_and_pages() {
    let registry = registry_with_planets(&[]).await;
    for flight_number in [12, 3, 40, 7, 1] {
        registry.save(historical(flight_number)).await.unwrap();
    }

    let all: Vec<i32> =
        registry.list(0, None).await.unwrap().iter().map(|l| l.flight_number).collect();
    let page: Vec<i32> =
        registry.list(1, Some(2)).await.unwrap().iter().map(|l| l.flight_number).collect();
    let tail: Vec<i32> =
        registry.list(3, None).await.unwrap().iter().map(|l| l.flight_number).collect();

    assert_eq!(all, vec![1, 3, 7, 12, 40]);
    assert_eq!(page, vec![3, 7]);
    assert_eq!(tail, vec![12, 40]);
}
