//! Error types for the transport layer.

use thiserror::Error;

/// Error type for low-level HTTP operations.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the client's timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be constructed from the provided URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Outcome taxonomy for a single delivery attempt.
///
/// Exactly one of two kinds is ever returned. There is no
/// "unclassified" state: [`Result`] forces every completed exchange
/// through classification before a value reaches the caller.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The exchange did not complete.
    ///
    /// Covers a URL that fails to parse, a payload that fails to
    /// encode, and any network-level failure where no response was
    /// received. The caller may retry.
    #[error("webhook exchange failed: {0}")]
    System(String),

    /// The exchange completed and the service reported an error.
    ///
    /// Carries the raw response body verbatim so that per-service
    /// dispatchers can decode it against the service's own error
    /// schema.
    #[error("service reported an error: {0}")]
    Service(String),
}

impl TransportError {
    /// Returns true if the exchange did not complete.
    #[must_use]
    pub const fn is_system(&self) -> bool {
        matches!(self, Self::System(_))
    }

    /// Returns true if the service reported an error body.
    #[must_use]
    pub const fn is_service(&self) -> bool {
        matches!(self, Self::Service(_))
    }

    /// Returns the raw rejection body for [`TransportError::Service`].
    #[must_use]
    pub fn service_body(&self) -> Option<&str> {
        match self {
            Self::Service(body) => Some(body),
            Self::System(_) => None,
        }
    }
}

impl From<HttpError> for TransportError {
    fn from(error: HttpError) -> Self {
        Self::System(error.to_string())
    }
}
