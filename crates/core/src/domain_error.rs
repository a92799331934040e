//! DomainError - the failure value carried across process boundaries

use thiserror::Error;

/// A failure surfaced by the wrapped database client.
///
/// Fields are private and never change after construction. `Display` prints
/// the human-readable message only; use [`DomainError::describe`] for the
/// `name: message` form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    status: i64,
    name: String,
    message: String,
    reason: Option<String>,
}

impl DomainError {
    /// Create a new error. `reason` becomes the error message.
    ///
    /// The `reason` accessor stays `None`: only decoders that received an
    /// explicit reason field populate it (see [`DomainError::with_reason`]).
    pub fn new(status: i64, name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            status,
            name: name.into(),
            message: reason.into(),
            reason: None,
        }
    }

    /// Builder: attach an explicit reason field
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// HTTP-like status code
    pub fn status(&self) -> i64 {
        self.status
    }

    /// Machine-readable kind, e.g. `not_found`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Always true for a `DomainError`
    pub fn is_error(&self) -> bool {
        true
    }

    /// `name: message`, the form the client bindings print
    pub fn describe(&self) -> String {
        format!("{}: {}", self.name, self.message)
    }
}

/// The capability set an error needs to cross a transport boundary.
///
/// Anything implementing this can be stringified the same way a
/// [`DomainError`] is.
pub trait Transportable {
    fn status(&self) -> i64;

    fn name(&self) -> &str;

    fn message(&self) -> &str;

    /// The separately recorded reason, if any
    fn reason(&self) -> Option<&str> {
        None
    }

    /// Encode with the process-wide codec
    fn stringify(&self) -> String
    where
        Self: Sized,
    {
        crate::transport::stringify(self)
    }
}

impl Transportable for DomainError {
    fn status(&self) -> i64 {
        DomainError::status(self)
    }

    fn name(&self) -> &str {
        DomainError::name(self)
    }

    fn message(&self) -> &str {
        DomainError::message(self)
    }

    fn reason(&self) -> Option<&str> {
        DomainError::reason(self)
    }
}
