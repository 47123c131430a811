//! Payload schemas for supported services.
//!
//! Pure data-transfer types: serializable message structures the
//! dispatchers POST, and the decodable rejection shapes the services
//! answer with. No delivery logic lives here.

mod discord;

#[cfg(test)]
mod discord_tests;

pub use discord::{
    DiscordAuthor, DiscordEmbed, DiscordEmbedField, DiscordFooter, DiscordPayload,
    DiscordRejection,
};
