//! Structured-record transport for [`DomainError`]
//!
//! The wire shape is a JSON object with exactly four keys, always in this
//! order:
//!
//! ```text
//! {"status":404,"name":"not_found","message":"missing","reason":null}
//! ```
//!
//! There is no version field. Decoders accept a missing or null `reason` and
//! ignore unknown keys.

use crate::{registry, CoreError, DomainError, Result, Transportable};
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// How the `reason` key is filled when encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReasonEncoding {
    /// Write the instance's own reason field, which constructed errors never
    /// set, so `reason` is `null`. Matches records already in circulation.
    #[default]
    Legacy,
    /// Fall back to the message when no reason was recorded
    Persist,
}

impl fmt::Display for ReasonEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonEncoding::Legacy => write!(f, "legacy"),
            ReasonEncoding::Persist => write!(f, "persist"),
        }
    }
}

impl FromStr for ReasonEncoding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(ReasonEncoding::Legacy),
            "persist" => Ok(ReasonEncoding::Persist),
            other => Err(CoreError::InvalidEncoding(other.to_string())),
        }
    }
}

/// Encoder/decoder pair for the transport string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportCodec {
    reason: ReasonEncoding,
}

impl TransportCodec {
    pub const fn new(reason: ReasonEncoding) -> Self {
        Self { reason }
    }

    pub fn reason_encoding(&self) -> ReasonEncoding {
        self.reason
    }

    /// Encode any transportable error. Never fails.
    pub fn encode<E: Transportable + ?Sized>(&self, err: &E) -> String {
        let reason = match self.reason {
            ReasonEncoding::Legacy => err.reason(),
            ReasonEncoding::Persist => Some(err.reason().unwrap_or(err.message())),
        };

        json!({
            "status": err.status(),
            "name": err.name(),
            "message": err.message(),
            "reason": reason,
        })
        .to_string()
    }

    pub(crate) fn decode(&self, text: &str) -> Result<DomainError> {
        let value: Value = serde_json::from_str(text).map_err(CoreError::Parse)?;
        // Derived struct decoding would also accept a positional array
        if !value.is_object() {
            return Err(CoreError::Parse(serde_json::Error::custom(
                "expected an error record object",
            )));
        }
        let record: TransportRecord = serde_json::from_value(value).map_err(CoreError::Parse)?;
        Ok(record.into_error())
    }
}

/// Decoded form of the wire record
#[derive(Debug, Deserialize)]
struct TransportRecord {
    status: i64,
    name: String,
    message: String,
    #[serde(default)]
    reason: Option<String>,
}

impl TransportRecord {
    fn into_error(self) -> DomainError {
        let err = DomainError::new(self.status, self.name, self.message);
        match self.reason {
            Some(reason) => err.with_reason(reason),
            None => err,
        }
    }
}

/// Encode an error with the process-wide codec
pub fn stringify<E: Transportable + ?Sized>(err: &E) -> String {
    registry::codec().encode(err)
}

/// Rebuild a [`DomainError`] from its transport string.
///
/// This is the only decoding path. Text that is not a JSON object with
/// integer `status` and string `name`/`message` fails with
/// [`CoreError::Parse`].
pub fn reconstitute(text: &str) -> Result<DomainError> {
    registry::codec().decode(text)
}
