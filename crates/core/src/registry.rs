//! Process-wide registration point for the transport codec
//!
//! Low-level deserialization code can call [`crate::transport::reconstitute`]
//! without knowing which component configured the codec. The codec is
//! written at most once, during startup; every later read sees that value.
//! Until something is installed the default [`TransportCodec`] is used.

use crate::{CoreError, Result, TransportCodec};
use std::sync::OnceLock;

static CODEC: OnceLock<TransportCodec> = OnceLock::new();

/// Install the process-wide codec.
///
/// Fails with [`CoreError::AlreadyInstalled`] if a codec is already in place;
/// the first one stays active.
pub fn install(codec: TransportCodec) -> Result<()> {
    CODEC.set(codec).map_err(|_| CoreError::AlreadyInstalled)
}

/// The active codec
pub fn codec() -> TransportCodec {
    CODEC.get().copied().unwrap_or_default()
}

pub fn is_installed() -> bool {
    CODEC.get().is_some()
}
