use super::{launch, planet};
use crate::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

/// Explicitly constructed handle to the shared database.
///
/// Opened once before ingestion runs and closed at process shutdown. Components receive it
/// behind an `Arc` instead of reaching for a global connection.
#[derive(Debug)]
pub struct PersistenceContext {
    /// The pooled `sea_orm` connection.
    conn: DatabaseConnection,
}

impl PersistenceContext {
    /// Connects to `url` and creates the `launches` and `planets` tables if absent.
    ///
    /// In-memory `SQLite` databases are private to a single connection, so the pool is
    /// pinned to one connection for those.
    pub async fn open(url: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(url);
        options.sqlx_logging(false);
        if url.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }
        let conn = Database::connect(options).await?;
        let ctx = Self { conn };
        ctx.create_tables().await?;
        info!("Persistence context open on {url}");
        Ok(ctx)
    }

    async fn create_tables(&self) -> Result<(), DbErr> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut launches = schema.create_table_from_entity(launch::Entity);
        launches.if_not_exists();
        self.conn.execute(backend.build(&launches)).await?;

        let mut planets = schema.create_table_from_entity(planet::Entity);
        planets.if_not_exists();
        self.conn.execute(backend.build(&planets)).await?;
        Ok(())
    }

    /// Returns the underlying connection for query building.
    pub fn conn(&self) -> &DatabaseConnection { &self.conn }

    /// Closes the connection pool. Any clone of the connection becomes unusable afterwards.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.conn.clone().close().await?;
        info!("Persistence context closed");
        Ok(())
    }
}
