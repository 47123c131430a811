//! Blocking facade over the async delivery path.
//!
//! Delivery is async-first internally, but many hosts (menu-bar apps,
//! scripts, cron jobs) have no async context of their own. These
//! functions run the exchange on a self-contained current-thread Tokio
//! runtime and return only at a terminal outcome, so callers get a
//! plain blocking call with no observable partial completion.

use serde::Serialize;

use crate::dispatch::{DiscordDispatcher, DiscordError};
use crate::payload::DiscordPayload;
use crate::transport::{JsonPoster, ReqwestClient, TransportError};

/// Posts a JSON payload to a webhook URL, blocking until the outcome is
/// known.
///
/// Equivalent to [`JsonPoster::post`] with a default client; see there
/// for the URL handling and classification rules.
///
/// # Errors
///
/// Returns [`TransportError`] exactly as the async path does. A failure
/// to start the delivery runtime is a [`TransportError::System`].
///
/// # Panics
///
/// Panics if called from within an async runtime; use
/// [`JsonPoster::post`] there instead.
pub fn post_json<P>(url: &str, payload: &P) -> Result<(), TransportError>
where
    P: Serialize + Sync + ?Sized,
{
    let runtime = delivery_runtime().map_err(TransportError::System)?;
    runtime.block_on(JsonPoster::new(ReqwestClient::new()).post(url, payload))
}

/// Sends a payload to a Discord webhook URL, blocking until the outcome
/// is known.
///
/// Equivalent to [`DiscordDispatcher::send`] with a default client.
///
/// # Errors
///
/// Returns [`DiscordError`] exactly as the async path does. A failure
/// to start the delivery runtime is a
/// [`DiscordError::Transport`] wrapping [`TransportError::System`].
///
/// # Panics
///
/// Panics if called from within an async runtime; use
/// [`DiscordDispatcher::send`] there instead.
pub fn send_discord(url: &str, payload: &DiscordPayload) -> Result<(), DiscordError> {
    let runtime = delivery_runtime()
        .map_err(|reason| DiscordError::Transport(TransportError::System(reason)))?;
    runtime.block_on(DiscordDispatcher::with_default_client().send(url, payload))
}

fn delivery_runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start delivery runtime: {e}"))
}
