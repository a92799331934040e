//! Error transport adapter for docbridge
//!
//! A [`DomainError`] carries a failure surfaced by the wrapped document
//! database client. It can be turned into a transport string with
//! [`transport::stringify`] and rebuilt on the other side of a process
//! boundary with [`transport::reconstitute`].

pub mod domain_error;
pub mod error;
pub mod failure;
pub mod registry;
pub mod status;
pub mod transport;

pub use domain_error::{DomainError, Transportable};
pub use error::{CoreError, Result};
pub use status::{http_status, status_for_name};
pub use transport::{reconstitute, stringify, ReasonEncoding, TransportCodec};
