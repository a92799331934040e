//! Capability table and the optional capability-discovery extension
//!
//! The `capability` table records which optional client features are
//! usable, so callers can check before relying on them. The table itself is
//! created on every connect; the extension that fills it is best-effort (see
//! [`crate::bootstrap`]).

use crate::{DbConnection, DbError, Result};
use tracing::{debug, info};

/// Full-text `find` support
pub const FIND: &str = "find";

/// Create the (empty) capability table
pub async fn initialize_schema(db: &DbConnection) -> Result<()> {
    db.query(SCHEMA_DEFINITION)
        .await
        .and_then(|response| response.check())
        .map_err(|e| DbError::SchemaInit(e.to_string()))?;
    Ok(())
}

/// Install the extension and register every capability it provides
pub async fn install_capabilities(db: &DbConnection) -> Result<()> {
    info!("Installing capability extension...");

    // Statement errors stay inside the response until checked
    db.query(EXTENSION_DEFINITION)
        .await
        .and_then(|response| response.check())
        .map_err(|e| DbError::SchemaInit(e.to_string()))?;

    db.query("UPSERT capability:find SET name = $name, installed_at = time::now()")
        .bind(("name", FIND.to_string()))
        .await
        .and_then(|response| response.check())
        .map_err(|e| DbError::SchemaInit(e.to_string()))?;

    info!("Capability extension installed");
    Ok(())
}

/// List the capabilities that have been discovered
pub async fn capabilities(db: &DbConnection) -> Result<Vec<String>> {
    let mut names: Vec<String> = db
        .query("SELECT VALUE name FROM capability")
        .await?
        .take(0)?;

    names.sort();
    debug!("Discovered capabilities: {:?}", names);
    Ok(names)
}

/// Fail with [`DbError::NotFound`] unless `name` was discovered
pub async fn require_capability(db: &DbConnection, name: &str) -> Result<()> {
    if capabilities(db).await?.iter().any(|c| c == name) {
        Ok(())
    } else {
        Err(DbError::NotFound("capability".into(), name.into()))
    }
}

const SCHEMA_DEFINITION: &str = r#"
DEFINE TABLE IF NOT EXISTS capability SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS name ON capability TYPE string;
DEFINE FIELD IF NOT EXISTS installed_at ON capability TYPE datetime DEFAULT time::now();
"#;

const EXTENSION_DEFINITION: &str = r#"
DEFINE ANALYZER IF NOT EXISTS find_analyzer
    TOKENIZERS blank, class
    FILTERS lowercase, ascii;
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_memory;

    #[tokio::test]
    async fn test_capabilities_empty_before_install() {
        let db = init_memory().await.unwrap();
        assert!(capabilities(&db).await.unwrap().is_empty());

        let err = require_capability(&db, FIND).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound(table, id) if table == "capability" && id == FIND));
    }

    #[tokio::test]
    async fn test_install_is_idempotent() {
        let db = init_memory().await.unwrap();

        install_capabilities(&db).await.unwrap();
        install_capabilities(&db).await.unwrap();

        assert_eq!(capabilities(&db).await.unwrap(), vec![FIND.to_string()]);
        require_capability(&db, FIND).await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_statement_is_schema_init() {
        let db = init_memory().await.unwrap();
        db.query("REMOVE FIELD name ON capability; DEFINE FIELD name ON capability TYPE int;")
            .await
            .unwrap()
            .check()
            .unwrap();

        let err = install_capabilities(&db).await.unwrap_err();
        assert!(matches!(err, DbError::SchemaInit(_)), "got {err:?}");
        assert!(capabilities(&db).await.unwrap().is_empty());
    }
}
