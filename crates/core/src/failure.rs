//! Conversion of loose client failure objects into [`DomainError`]
//!
//! The client reports failures as ad-hoc JSON: sometimes `{name, reason}`,
//! sometimes a CouchDB-style `{error, reason}` body, sometimes a socket error
//! carrying only a `code`.

use crate::status::{status_for_name, DEFAULT_STATUS};
use crate::DomainError;
use serde_json::Value;

/// Name given to failures that carry no usable name
pub const GENERIC_NAME: &str = "Error";

fn socket_description(code: &str) -> Option<&'static str> {
    match code {
        "ECONNREFUSED" => Some("connection refused"),
        "ECONNRESET" => Some("connection reset"),
        "ETIMEDOUT" => Some("connection timed out"),
        "ENOTFOUND" => Some("host not found"),
        _ => None,
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

impl DomainError {
    /// Build a `DomainError` from a failure object reported by the client.
    ///
    /// Returns `None` for `null`, which the client uses for "no error".
    pub fn from_failure(value: &Value) -> Option<DomainError> {
        match value {
            Value::Null => None,
            Value::String(message) => Some(DomainError::new(DEFAULT_STATUS, GENERIC_NAME, message.as_str())),
            Value::Object(_) => Some(Self::from_failure_object(value)),
            other => Some(DomainError::new(DEFAULT_STATUS, GENERIC_NAME, other.to_string())),
        }
    }

    fn from_failure_object(value: &Value) -> DomainError {
        let explicit_status = value.get("status").and_then(Value::as_i64);

        if let Some(description) = str_field(value, "code").and_then(socket_description) {
            return DomainError::new(
                explicit_status.unwrap_or(DEFAULT_STATUS),
                GENERIC_NAME,
                description,
            );
        }

        let name = str_field(value, "name")
            .or_else(|| str_field(value, "error"))
            .unwrap_or(GENERIC_NAME);
        let message = str_field(value, "reason")
            .or_else(|| str_field(value, "message"))
            .unwrap_or_default();
        let status = explicit_status
            .or_else(|| status_for_name(name))
            .unwrap_or(DEFAULT_STATUS);

        DomainError::new(status, name, message)
    }
}
