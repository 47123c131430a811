//! JSON posting and response classification.

use serde::Serialize;

use super::{HttpClient, HttpRequest, TransportError};

/// Posts JSON payloads to webhook endpoints and classifies the outcome.
///
/// This is the heart of the transport layer: one POST per call, no
/// retries, no state shared between calls.
///
/// # Classification
///
/// Webhook services in the style of Discord report errors as a JSON
/// object in the response body, regardless of HTTP status (often a
/// 200 with an embedded error report). The poster therefore classifies
/// on body shape alone:
///
/// - body parses as a JSON **object** → the service rejected the
///   payload ([`TransportError::Service`], raw body preserved)
/// - anything else (empty, array, scalar, non-JSON bytes) → success
///
/// **The HTTP status code is never consulted.** A 500 with an empty
/// body is a success; a 200 with `{"code":0,"message":"m"}` is a
/// failure. Generalizing to services that acknowledge success with a
/// JSON object would require a per-service classification predicate;
/// none of the supported services needs one.
///
/// # Example
///
/// ```no_run
/// use hookpost::transport::{JsonPoster, ReqwestClient};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Ping {
///     content: String,
/// }
///
/// # async fn example() -> Result<(), hookpost::transport::TransportError> {
/// let poster = JsonPoster::new(ReqwestClient::new());
/// let payload = Ping { content: "hello".to_string() };
/// poster.post("https://example.com/hook", &payload).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JsonPoster<H> {
    client: H,
}

impl<H> JsonPoster<H> {
    /// Creates a poster backed by the given HTTP client.
    pub const fn new(client: H) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> JsonPoster<H> {
    /// Serializes `payload` to JSON, POSTs it to `url`, and classifies
    /// the response.
    ///
    /// The URL is trimmed of leading/trailing whitespace and must parse
    /// as an absolute URL; a malformed URL fails before any network
    /// activity. The payload is borrowed for serialization only and is
    /// never mutated or retained.
    ///
    /// # Errors
    ///
    /// - [`TransportError::System`] if the URL does not parse, the
    ///   payload does not encode, or the exchange never produced a
    ///   response (DNS failure, refused connection, timeout, TLS
    ///   failure, cancellation).
    /// - [`TransportError::Service`] if a response arrived and its body
    ///   is a JSON object. The raw body is preserved verbatim for
    ///   service-specific decoding.
    pub async fn post<P>(&self, url: &str, payload: &P) -> Result<(), TransportError>
    where
        P: Serialize + Sync + ?Sized,
    {
        let request = build_request(url, payload)?;
        let response = self.client.request(request).await?;
        classify(&response.body)
    }
}

/// Builds the POST request: trims and parses the URL, encodes the
/// payload, and sets the JSON content type.
fn build_request<P>(url: &str, payload: &P) -> Result<HttpRequest, TransportError>
where
    P: Serialize + ?Sized,
{
    let trimmed = url.trim();
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| TransportError::System(format!("invalid webhook URL '{trimmed}': {e}")))?;

    let body = serde_json::to_vec(payload)
        .map_err(|e| TransportError::System(format!("payload encoding failed: {e}")))?;

    Ok(HttpRequest::post(parsed)
        .with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        )
        .with_body(body))
}

/// Classifies a response body: a JSON object means the service reported
/// an error, anything else means success.
///
/// Pure function of the body bytes; the same input always yields the
/// same classification.
pub(crate) fn classify(body: &[u8]) -> Result<(), TransportError> {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(_)) => Err(TransportError::Service(
            String::from_utf8_lossy(body).into_owned(),
        )),
        _ => Ok(()),
    }
}
