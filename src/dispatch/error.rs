//! Error types for service dispatchers.

use thiserror::Error;

use crate::payload::DiscordRejection;
use crate::transport::TransportError;

/// Error type for Discord webhook delivery.
///
/// Refines the transport taxonomy with Discord's own rejection schema.
/// A rejection body that matches the schema becomes [`Rejected`];
/// one that does not becomes [`UnrecognizedRejection`] with the raw
/// body intact, so schema drift upstream is diagnosable rather than
/// silent.
///
/// [`Rejected`]: DiscordError::Rejected
/// [`UnrecognizedRejection`]: DiscordError::UnrecognizedRejection
#[derive(Debug, Error)]
pub enum DiscordError {
    /// Transport-level failure, forwarded unchanged from the transport
    /// layer.
    #[error(transparent)]
    Transport(TransportError),

    /// Discord rejected the payload and the rejection decoded against
    /// Discord's error schema.
    #[error("Discord rejected the payload: {0}")]
    Rejected(DiscordRejection),

    /// Discord rejected the payload but the rejection body did not
    /// match the expected `{code, message}` schema.
    ///
    /// Carries the raw body verbatim alongside the decode failure
    /// reason.
    #[error("unrecognized Discord rejection ({reason}): {body}")]
    UnrecognizedRejection {
        /// Raw rejection body as received.
        body: String,
        /// Why the body failed to decode.
        reason: String,
    },
}

impl DiscordError {
    /// Returns the decoded rejection for [`DiscordError::Rejected`].
    #[must_use]
    pub const fn rejection(&self) -> Option<&DiscordRejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }

    /// Returns the raw rejection body, whether or not it decoded.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedRejection { body, .. } => Some(body),
            Self::Transport(e) => e.service_body(),
            Self::Rejected(_) => None,
        }
    }
}
