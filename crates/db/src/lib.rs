//! Client bootstrap for docbridge
//!
//! Opens the embedded SurrealDB client, keeps one process-wide handle, and
//! maps client failures into transportable [`docbridge_core::DomainError`]s.

pub mod adapter;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod schema;

pub use bootstrap::acquire;
pub use config::{Engine, Settings};
pub use error::{DbError, Result};

use std::fmt::Display;
#[cfg(feature = "rocksdb")]
use surrealdb::engine::local::RocksDb;
use surrealdb::engine::local::{Db, Mem};
use surrealdb::Surreal;
use tracing::instrument;

/// Database connection type
pub type DbConnection = Surreal<Db>;

/// Open the configured engine, select namespace and database, and create
/// the capability table.
///
/// Any failure to open the engine is reported as [`DbError::LoadFailure`].
#[instrument(skip(settings), fields(engine = %settings.engine))]
pub async fn connect(settings: &Settings) -> Result<DbConnection> {
    let db = open_engine(&settings.engine).await?;
    db.use_ns(settings.namespace.clone())
        .use_db(settings.database.clone())
        .await
        .map_err(|e| load_failure(&settings.engine, e))?;
    schema::initialize_schema(&db).await?;
    Ok(db)
}

/// Initialize database in-memory (for testing)
pub async fn init_memory() -> Result<DbConnection> {
    connect(&Settings::memory()).await
}

async fn open_engine(engine: &Engine) -> Result<DbConnection> {
    match engine {
        Engine::Memory => Surreal::new::<Mem>(())
            .await
            .map_err(|e| load_failure(engine, e)),
        #[cfg(feature = "rocksdb")]
        Engine::RocksDb(path) => Surreal::new::<RocksDb>(path.as_path())
            .await
            .map_err(|e| load_failure(engine, e)),
        #[cfg(not(feature = "rocksdb"))]
        Engine::RocksDb(_) => Err(load_failure(engine, "rocksdb support not compiled in")),
    }
}

fn load_failure(engine: &Engine, cause: impl Display) -> DbError {
    DbError::LoadFailure {
        engine: engine.to_string(),
        cause: cause.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_leaves_capability_table_empty() {
        let settings = Settings {
            namespace: "bridge".into(),
            database: "fresh".into(),
            ..Settings::memory()
        };
        let db = connect(&settings).await.expect("Failed to connect");

        let rows: Vec<serde_json::Value> = db.select("capability").await.unwrap();
        assert!(rows.is_empty());
        assert!(schema::capabilities(&db).await.unwrap().is_empty());
    }

    #[cfg(feature = "rocksdb")]
    #[tokio::test]
    async fn test_unopenable_path_is_load_failure() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let settings = Settings::memory().with_engine(Engine::RocksDb(file.path().join("data")));

        let err = connect(&settings).await.unwrap_err();
        match err {
            DbError::LoadFailure { engine, cause } => {
                assert!(engine.starts_with("rocksdb"));
                assert!(!cause.is_empty());
            }
            other => panic!("expected LoadFailure, got {other:?}"),
        }
    }
}
