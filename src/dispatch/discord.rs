//! Discord webhook dispatcher.

use crate::payload::{DiscordPayload, DiscordRejection};
use crate::transport::{HttpClient, JsonPoster, ReqwestClient, TransportError};

use super::{Dispatch, DiscordError, Service};

/// Delivers [`DiscordPayload`]s to Discord webhook URLs.
///
/// Thin adapter over [`JsonPoster`]: it forwards the POST and, when the
/// service rejects the payload, decodes the rejection body into
/// [`DiscordRejection`]. Stateless across calls.
///
/// # Example
///
/// ```no_run
/// use hookpost::dispatch::DiscordDispatcher;
/// use hookpost::payload::DiscordPayload;
///
/// # async fn example() -> Result<(), hookpost::dispatch::DiscordError> {
/// let dispatcher = DiscordDispatcher::with_default_client();
/// let payload = DiscordPayload::new().with_content("battery at 20%");
/// dispatcher.send("https://discord.com/api/webhooks/…", &payload).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DiscordDispatcher<H> {
    poster: JsonPoster<H>,
}

impl<H> DiscordDispatcher<H> {
    /// Creates a dispatcher backed by the given HTTP client.
    pub const fn new(client: H) -> Self {
        Self {
            poster: JsonPoster::new(client),
        }
    }
}

impl DiscordDispatcher<ReqwestClient> {
    /// Creates a dispatcher backed by a default [`ReqwestClient`].
    #[must_use]
    pub fn with_default_client() -> Self {
        Self::new(ReqwestClient::new())
    }
}

impl Default for DiscordDispatcher<ReqwestClient> {
    fn default() -> Self {
        Self::with_default_client()
    }
}

impl<H: HttpClient> DiscordDispatcher<H> {
    /// Delivers a payload to a Discord webhook URL.
    ///
    /// # Errors
    ///
    /// - [`DiscordError::Transport`] when the exchange did not complete;
    ///   the transport error is forwarded unchanged.
    /// - [`DiscordError::Rejected`] when Discord reported an error that
    ///   decodes against its `{code, message}` schema.
    /// - [`DiscordError::UnrecognizedRejection`] when Discord reported
    ///   an error that does not; the raw body is preserved.
    pub async fn send(&self, url: &str, payload: &DiscordPayload) -> Result<(), DiscordError> {
        tracing::debug!(service = %Service::Discord, "delivering webhook payload");

        match self.poster.post(url, payload).await {
            Ok(()) => Ok(()),
            Err(TransportError::Service(body)) => Err(decode_rejection(body)),
            Err(error @ TransportError::System(_)) => Err(DiscordError::Transport(error)),
        }
    }
}

impl<H: HttpClient> Dispatch for DiscordDispatcher<H> {
    type Payload = DiscordPayload;
    type Error = DiscordError;

    fn send(
        &self,
        url: &str,
        payload: &Self::Payload,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send {
        Self::send(self, url, payload)
    }
}

/// Decodes a raw rejection body against Discord's error schema, keeping
/// the raw text when the shape is unexpected.
fn decode_rejection(body: String) -> DiscordError {
    match serde_json::from_str::<DiscordRejection>(&body) {
        Ok(rejection) => {
            tracing::debug!(code = rejection.code, "service rejected the payload");
            DiscordError::Rejected(rejection)
        }
        Err(e) => DiscordError::UnrecognizedRejection {
            body,
            reason: e.to_string(),
        },
    }
}
