//! Per-service dispatch layer.
//!
//! A dispatcher binds the generic transport to one service's payload
//! and error schema: it forwards the POST, passes success through, and
//! re-decodes a service rejection into the service's own error shape.
//! Transport-level failures are propagated unchanged.

mod discord;
mod error;


pub use discord::DiscordDispatcher;
pub use error::DiscordError;

use std::fmt;

/// Catalog of services this crate can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// The "Discord" service.
    Discord,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discord => f.write_str("Discord"),
        }
    }
}

/// Trait for per-service webhook dispatchers.
///
/// Marks the adapter seam: each supported service implements this with
/// its own payload schema and error type, so callers can be written
/// against the trait and services can be swapped or mocked in tests.
pub trait Dispatch: Send + Sync {
    /// Payload schema the service accepts.
    type Payload;
    /// Service-specific delivery error.
    type Error;

    /// Delivers a payload to the given webhook URL.
    ///
    /// Every call is a single independent attempt; the caller decides
    /// whether to retry.
    fn send(
        &self,
        url: &str,
        payload: &Self::Payload,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;
}
