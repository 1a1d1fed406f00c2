use super::{DEFAULT_CUSTOMERS, DEFAULT_FLIGHT_NUMBER, Launch, LaunchRequest, ScheduleError, parse_launch_date};
use crate::event;
use crate::persistence::{PersistenceContext, launch};
use crate::planet_catalog::PlanetCatalog;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, Condition, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Row limit standing in for "no limit" when paging launches.
const UNLIMITED: u64 = i64::MAX.unsigned_abs();

/// Registry of all launch records.
///
/// Every launch write goes through [`LaunchRegistry::save`], an upsert keyed on the flight
/// number; abort is the only other mutation.
#[derive(Debug)]
pub struct LaunchRegistry {
    /// Shared persistence context.
    ctx: Arc<PersistenceContext>,
    /// Planet catalog consulted to validate scheduling targets.
    planets: Arc<PlanetCatalog>,
    /// Serializes flight number assignment and the following write.
    schedule_lock: Mutex<()>,
}

impl LaunchRegistry {
    pub fn new(ctx: Arc<PersistenceContext>, planets: Arc<PlanetCatalog>) -> Self {
        Self { ctx, planets, schedule_lock: Mutex::new(()) }
    }

    /// Lists launches ordered by ascending flight number.
    ///
    /// # Arguments
    /// * `skip` – Number of launches to skip from the start.
    /// * `limit` – Maximum number of launches returned, `None` for all remaining.
    pub async fn list(&self, skip: u64, limit: Option<u64>) -> Result<Vec<Launch>, DbErr> {
        let launches = launch::Entity::find()
            .order_by_asc(launch::Column::FlightNumber)
            .limit(limit.unwrap_or(UNLIMITED))
            .offset(skip)
            .all(self.ctx.conn())
            .await?;
        Ok(launches.into_iter().map(Launch::from).collect())
    }

    /// Looks up a single launch by flight number.
    pub async fn find(&self, flight_number: i32) -> Result<Option<Launch>, DbErr> {
        let launch = launch::Entity::find_by_id(flight_number).one(self.ctx.conn()).await?;
        Ok(launch.map(Launch::from))
    }

    pub async fn exists(&self, flight_number: i32) -> Result<bool, DbErr> {
        Ok(self.find(flight_number).await?.is_some())
    }

    /// Returns the flight number the next scheduled launch would receive.
    ///
    /// This is `max + 1` over all stored flight numbers, or [`DEFAULT_FLIGHT_NUMBER`] on an
    /// empty registry. The value is only advisory until a write using it has committed.
    pub async fn next_flight_number(&self) -> Result<i32, DbErr> {
        let latest = launch::Entity::find()
            .order_by_desc(launch::Column::FlightNumber)
            .one(self.ctx.conn())
            .await?;
        match latest {
            None => Ok(DEFAULT_FLIGHT_NUMBER),
            Some(launch) => launch.flight_number.checked_add(1).ok_or_else(|| {
                DbErr::Custom(format!("flight numbers exhausted after {}", launch.flight_number))
            }),
        }
    }

    /// Inserts `launch` or replaces the stored launch with the same flight number.
    pub async fn save(&self, launch: Launch) -> Result<(), DbErr> {
        let on_conflict = OnConflict::column(launch::Column::FlightNumber)
            .update_columns([
                launch::Column::Mission,
                launch::Column::Rocket,
                launch::Column::LaunchDate,
                launch::Column::Target,
                launch::Column::Customers,
                launch::Column::Upcoming,
                launch::Column::Success,
            ])
            .to_owned();
        launch::Entity::insert(launch::ActiveModel::from(launch))
            .on_conflict(on_conflict)
            .exec_without_returning(self.ctx.conn())
            .await?;
        Ok(())
    }

    /// Validates `request` and stores it as a new upcoming launch.
    ///
    /// Validation order: required fields, launch date, target planet. The new launch gets the
    /// next flight number, is optimistically marked successful and carries the
    /// [`DEFAULT_CUSTOMERS`].
    pub async fn schedule(&self, request: LaunchRequest) -> Result<Launch, ScheduleError> {
        let mission = required(request.mission, "mission")?;
        let rocket = required(request.rocket, "rocket")?;
        let raw_date = required(request.launch_date, "launchDate")?;
        let target = required(request.target, "target")?;

        let Some(launch_date) = parse_launch_date(&raw_date) else {
            return Err(ScheduleError::InvalidDate(raw_date));
        };
        if !self.planets.exists(&target).await? {
            return Err(ScheduleError::TargetNotFound(target));
        }

        let _guard = self.schedule_lock.lock().await;
        let launch = Launch {
            flight_number: self.next_flight_number().await?,
            mission,
            rocket,
            launch_date,
            target,
            customers: DEFAULT_CUSTOMERS.iter().map(ToString::to_string).collect(),
            upcoming: true,
            success: true,
        };
        self.save(launch.clone()).await?;
        event!("Scheduled launch {} ({}) to {}", launch.flight_number, launch.mission, launch.target);
        Ok(launch)
    }

    /// Marks the launch with `flight_number` as no longer upcoming and unsuccessful.
    ///
    /// # Returns
    /// `true` if exactly one launch was modified. An unknown flight number or an already
    /// aborted launch yields `false`.
    pub async fn abort(&self, flight_number: i32) -> Result<bool, DbErr> {
        let result = launch::Entity::update_many()
            .col_expr(launch::Column::Upcoming, Expr::value(false))
            .col_expr(launch::Column::Success, Expr::value(false))
            .filter(launch::Column::FlightNumber.eq(flight_number))
            .filter(
                Condition::any()
                    .add(launch::Column::Upcoming.eq(true))
                    .add(launch::Column::Success.eq(true)),
            )
            .exec(self.ctx.conn())
            .await?;
        let aborted = result.rows_affected == 1;
        if aborted {
            event!("Aborted launch {flight_number}");
        }
        Ok(aborted)
    }
}

/// Unwraps a required request field, treating an empty value as absent.
fn required(value: Option<String>, field: &'static str) -> Result<String, ScheduleError> {
    value.filter(|v| !v.trim().is_empty()).ok_or(ScheduleError::MissingField(field))
}
