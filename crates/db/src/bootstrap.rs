//! Process-wide client handle
//!
//! The handle is acquired once: either installed explicitly or loaded from
//! [`Settings`] on first use. Loading also applies the capability extension,
//! whose failure is logged and ignored.

use crate::{connect, schema, DbConnection, Result, Settings};
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

static CLIENT: OnceCell<DbConnection> = OnceCell::const_new();

/// Return the process-wide handle, loading it first if needed.
///
/// Concurrent callers share a single load. A failed load leaves nothing
/// installed, so a later call may retry.
#[instrument(skip(settings), fields(engine = %settings.engine))]
pub async fn acquire(settings: &Settings) -> Result<DbConnection> {
    if let Some(db) = CLIENT.get() {
        debug!("Reusing installed client handle");
        return Ok(db.clone());
    }

    let db = CLIENT.get_or_try_init(|| load(settings)).await?;
    Ok(db.clone())
}

/// Install an already opened handle. Returns `false` if one was in place.
pub fn install(db: DbConnection) -> bool {
    CLIENT.set(db).is_ok()
}

/// The installed handle, if any
pub fn current() -> Option<DbConnection> {
    CLIENT.get().cloned()
}

async fn load(settings: &Settings) -> Result<DbConnection> {
    info!("Loading client: {}", settings.engine);
    let db = connect(settings).await?;

    if let Err(e) = schema::install_capabilities(&db).await {
        debug!("Capability extension unavailable (non-fatal): {}", e);
    }

    Ok(db)
}
