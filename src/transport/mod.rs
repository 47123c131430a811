//! Transport layer for delivering JSON payloads to webhook endpoints.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - JSON posting with outcome classification ([`JsonPoster`])
//!
//! The transport layer knows nothing about any specific service's
//! payload or error schema; see [`crate::dispatch`] for the per-service
//! adapters built on top of it.

mod client;
mod error;
mod http;
mod poster;


pub use client::ReqwestClient;
pub use error::{HttpError, TransportError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use poster::JsonPoster;
