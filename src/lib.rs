//! hookpost: Webhook Notification Dispatcher
//!
//! A library for delivering JSON notification payloads to pre-shared
//! webhook URLs and classifying the service's response.

pub mod blocking;
pub mod dispatch;
pub mod payload;
pub mod settings;
pub mod transport;
