//! Database error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// The client engine could not be opened at all
    #[error("Failed to load {engine} client: {cause}")]
    LoadFailure { engine: String, cause: String },

    #[error("Record not found: {0} with id {1}")]
    NotFound(String, String),

    #[error("Schema initialization failed: {0}")]
    SchemaInit(String),

    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),
}

pub type Result<T> = std::result::Result<T, DbError>;
