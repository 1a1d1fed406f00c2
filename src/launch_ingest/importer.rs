use super::{IngestionError, LaunchCatalogSource};
use crate::http_handler::http_response::launch_query::CatalogLaunch;
use crate::launch_registry::{Launch, LaunchRegistry, UNTARGETED, parse_launch_date};
use crate::{info, log, warn};
use itertools::Itertools;
use sea_orm::DbErr;
use std::{fmt, sync::Arc};

/// Flight number of the launch whose presence marks the catalog as imported.
const PROBE_FLIGHT_NUMBER: i32 = 1;
const PROBE_MISSION: &str = "FalconSat";
const PROBE_ROCKET: &str = "Falcon 1";

/// Seeds the launch registry with the historical launch catalog.
pub struct LaunchImporter {
    registry: Arc<LaunchRegistry>,
    source: Arc<dyn LaunchCatalogSource>,
}

/// A catalog record that could not be normalized into a [`Launch`].
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RejectedLaunch {
    flight_number: i32,
    date_local: String,
}

impl fmt::Display for RejectedLaunch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flight {} has unparsable launch date {:?}", self.flight_number, self.date_local)
    }
}

impl LaunchImporter {
    pub fn new(registry: Arc<LaunchRegistry>, source: Arc<dyn LaunchCatalogSource>) -> Self {
        Self { registry, source }
    }

    /// Imports the catalog unless it has been imported before.
    ///
    /// The check looks for the very first historical launch. When it is present no network
    /// call is made. Otherwise the full catalog is fetched and every record is upserted by
    /// flight number. That first launch is written last, so an interrupted import is
    /// completed by the next run.
    pub async fn import_if_empty(&self) -> Result<(), IngestionError> {
        if self.is_imported().await? {
            log!("Launch data already loaded");
            return Ok(());
        }
        info!("Loading launch data...");
        let imported = self.populate().await?;
        info!("Imported {imported} launches from the catalog");
        Ok(())
    }

    async fn is_imported(&self) -> Result<bool, DbErr> {
        let first = self.registry.find(PROBE_FLIGHT_NUMBER).await?;
        Ok(first.as_ref().is_some_and(is_probe))
    }

    async fn populate(&self) -> Result<usize, IngestionError> {
        let docs = self.source.fetch_launches().await?;
        let (launches, rejected): (Vec<Launch>, Vec<RejectedLaunch>) =
            docs.into_iter().map(normalize).partition_result();
        for reject in &rejected {
            warn!("Skipping catalog launch: {reject}");
        }
        let imported = launches.len();
        for launch in write_order(launches) {
            self.registry.save(launch).await?;
        }
        Ok(imported)
    }
}

fn is_probe(launch: &Launch) -> bool {
    launch.flight_number == PROBE_FLIGHT_NUMBER
        && launch.mission == PROBE_MISSION
        && launch.rocket == PROBE_ROCKET
}

/// Orders imported launches so the record marking a finished import comes last.
pub(crate) fn write_order(launches: Vec<Launch>) -> Vec<Launch> {
    let (mut ordered, probe): (Vec<Launch>, Vec<Launch>) =
        launches.into_iter().partition(|launch| !is_probe(launch));
    ordered.extend(probe);
    ordered
}

/// Maps a catalog record onto the local launch schema.
///
/// Historical launches are trusted and get the [`UNTARGETED`] target instead of a planet.
/// A missing outcome counts as success, the same default scheduled launches start with.
pub(crate) fn normalize(doc: CatalogLaunch) -> Result<Launch, RejectedLaunch> {
    let Some(launch_date) = parse_launch_date(doc.date_local()) else {
        return Err(RejectedLaunch {
            flight_number: doc.flight_number(),
            date_local: doc.date_local().to_string(),
        });
    };
    Ok(Launch {
        flight_number: doc.flight_number(),
        mission: doc.name().to_string(),
        rocket: doc.rocket_name().to_string(),
        launch_date,
        target: UNTARGETED.to_string(),
        customers: doc.customers(),
        upcoming: doc.is_upcoming(),
        success: doc.success().unwrap_or(true),
    })
}
