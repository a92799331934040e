//! Mapping of client failures into [`DomainError`]

use crate::DbError;
use docbridge_core::DomainError;

impl DbError {
    /// The transportable form of this error
    pub fn to_domain(&self) -> DomainError {
        let (status, name) = match self {
            DbError::LoadFailure { .. } => (503, "load_failure"),
            DbError::NotFound(..) => (404, "not_found"),
            DbError::SchemaInit(_) => (500, "schema_init"),
            DbError::Surreal(_) => (500, "internal_server_error"),
        };
        DomainError::new(status, name, self.to_string())
    }
}

impl From<&DbError> for DomainError {
    fn from(err: &DbError) -> Self {
        err.to_domain()
    }
}

impl From<DbError> for DomainError {
    fn from(err: DbError) -> Self {
        err.to_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docbridge_core::{reconstitute, stringify};

    #[test]
    fn test_load_failure_maps_to_503() {
        let err = DbError::LoadFailure {
            engine: "rocksdb (/nowhere)".into(),
            cause: "IO error: Not a directory".into(),
        };
        let domain = err.to_domain();

        assert_eq!(domain.status(), 503);
        assert_eq!(domain.name(), "load_failure");
        assert_eq!(
            domain.message(),
            "Failed to load rocksdb (/nowhere) client: IO error: Not a directory"
        );
    }

    #[test]
    fn test_not_found_survives_transport() {
        let err = DbError::NotFound("capability".into(), "find".into());
        let decoded = reconstitute(&stringify(&DomainError::from(&err))).unwrap();

        assert_eq!(decoded.status(), 404);
        assert_eq!(decoded.name(), "not_found");
        assert_eq!(decoded.message(), "Record not found: capability with id find");
    }

    #[test]
    fn test_schema_init() {
        let domain: DomainError = DbError::SchemaInit("parse error".into()).into();
        assert_eq!(domain.status(), 500);
        assert_eq!(domain.name(), "schema_init");
    }
}
