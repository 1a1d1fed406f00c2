use super::{SurveyError, SurveyRow};
use crate::persistence::{PersistenceContext, planet};
use crate::{error, info, warn};
use futures::{FutureExt, Stream, TryStreamExt, future};
use sea_orm::sea_query::OnConflict;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set};
use std::sync::Arc;

/// A habitable planet, as exposed to the route layer.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub kepler_name: String,
}

impl From<planet::Model> for Planet {
    fn from(value: planet::Model) -> Self { Self { kepler_name: value.kepler_name } }
}

/// Filters survey data down to habitable planets and serves planet lookups.
///
/// Planets are only ever written by [`PlanetCatalog::filter_and_load`]; everything else is
/// read-only.
#[derive(Debug)]
pub struct PlanetCatalog {
    ctx: Arc<PersistenceContext>,
}

impl PlanetCatalog {
    /// Maximum number of planet upserts in flight during a filter pass.
    const MAX_PENDING_WRITES: usize = 16;

    pub fn new(ctx: Arc<PersistenceContext>) -> Self { Self { ctx } }

    /// Runs one filter pass over `rows` and upserts every habitable row by kepler name.
    ///
    /// Every row is attempted exactly once. Upserts run concurrently and may settle in any
    /// order; a failing upsert is logged and skipped. Decoding errors coming out of `rows`
    /// abort the pass.
    ///
    /// # Returns
    /// The number of habitable rows stored by this pass. Re-running the pass over the same
    /// data returns the same number and leaves the stored planet count unchanged.
    pub async fn filter_and_load<S>(&self, rows: S) -> Result<u64, SurveyError>
    where S: Stream<Item = Result<SurveyRow, SurveyError>> {
        let stored = rows
            .try_filter(|row| future::ready(row.is_habitable()))
            .map_ok(|row| self.save_planet(row).map(Ok::<bool, SurveyError>))
            .try_buffer_unordered(Self::MAX_PENDING_WRITES)
            .try_fold(0u64, |acc, saved| future::ready(Ok::<u64, SurveyError>(acc + u64::from(saved))))
            .await?;

        let found = self.count().await?;
        info!("{found} habitable planets found!");
        Ok(stored)
    }

    /// Upserts a single habitable row. Failures are swallowed after logging.
    async fn save_planet(&self, row: SurveyRow) -> bool {
        if row.kepler_name.is_empty() {
            warn!("Skipping habitable survey row without kepler name");
            return false;
        }
        let model = planet::ActiveModel { kepler_name: Set(row.kepler_name.clone()) };
        let upsert = planet::Entity::insert(model)
            .on_conflict(OnConflict::column(planet::Column::KeplerName).do_nothing().to_owned())
            .exec_without_returning(self.ctx.conn())
            .await;
        match upsert {
            Ok(_) => true,
            Err(e) => {
                error!("Could not save planet {}: {e}", row.kepler_name);
                false
            }
        }
    }

    /// All stored planets, ordered by kepler name.
    pub async fn list(&self) -> Result<Vec<Planet>, DbErr> {
        let planets = planet::Entity::find()
            .order_by_asc(planet::Column::KeplerName)
            .all(self.ctx.conn())
            .await?;
        Ok(planets.into_iter().map(Planet::from).collect())
    }

    /// Whether a planet named `kepler_name` has been stored.
    pub async fn exists(&self, kepler_name: &str) -> Result<bool, DbErr> {
        let planet = planet::Entity::find_by_id(kepler_name.to_string()).one(self.ctx.conn()).await?;
        Ok(planet.is_some())
    }

    /// Number of stored planets.
    pub async fn count(&self) -> Result<u64, DbErr> {
        planet::Entity::find().count(self.ctx.conn()).await
    }
}
