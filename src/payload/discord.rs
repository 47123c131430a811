//! Payload and rejection schemas for the "Discord" service.
//!
//! Field names follow Discord's webhook API; unset optional fields are
//! omitted from the serialized JSON rather than sent as null.
//! See <https://birdie0.github.io/discord-webhooks-guide/discord_webhook.html>
//! for the upstream structure reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete webhook payload for the "Discord" service.
///
/// For a successful interaction Discord requires at least `content` or
/// one embed. `username` and `avatar_url` override the identity
/// configured on the webhook itself.
///
/// # Example
///
/// ```
/// use hookpost::payload::{DiscordEmbed, DiscordPayload};
///
/// let payload = DiscordPayload::new()
///     .with_content("battery at 20%")
///     .with_embed(DiscordEmbed::new().with_title("Status"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscordPayload {
    /// Plain message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Overrides the webhook's predefined username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Overrides the webhook's predefined avatar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Rich embeds; a single request may carry several.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<DiscordEmbed>>,
}

impl DiscordPayload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the username override.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the avatar override.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Appends an embed.
    #[must_use]
    pub fn with_embed(mut self, embed: DiscordEmbed) -> Self {
        self.embeds.get_or_insert_with(Vec::new).push(embed);
        self
    }
}

/// A rich embed inside a [`DiscordPayload`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscordEmbed {
    /// Author block shown above the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<DiscordAuthor>,
    /// Footer block shown below the fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<DiscordFooter>,
    /// Embed title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Embed body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accent color as a decimal RGB value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    /// Name/value field blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<DiscordEmbedField>>,
}

impl DiscordEmbed {
    /// Creates an empty embed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author block.
    #[must_use]
    pub fn with_author(mut self, author: DiscordAuthor) -> Self {
        self.author = Some(author);
        self
    }

    /// Sets the footer block.
    #[must_use]
    pub fn with_footer(mut self, footer: DiscordFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the accent color (decimal RGB).
    #[must_use]
    pub const fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Appends a field block.
    #[must_use]
    pub fn with_field(mut self, field: DiscordEmbedField) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field);
        self
    }
}

/// Author block of a [`DiscordEmbed`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscordAuthor {
    /// Author display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Author icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl DiscordAuthor {
    /// Creates an empty author block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the icon URL.
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}

/// Footer block of a [`DiscordEmbed`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscordFooter {
    /// Footer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Footer icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl DiscordFooter {
    /// Creates an empty footer block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the footer text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the icon URL.
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}

/// Name/value field block of a [`DiscordEmbed`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscordEmbedField {
    /// Field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Field value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether the field renders inline with its neighbors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl DiscordEmbedField {
    /// Creates an empty field block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the field value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the inline flag.
    #[must_use]
    pub const fn with_inline(mut self, inline: bool) -> Self {
        self.inline = Some(inline);
        self
    }
}

/// Error report returned by a Discord webhook.
///
/// Used strictly for decoding rejection bodies; Discord answers every
/// rejected payload with a JSON object of this shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiscordRejection {
    /// Discord's numeric error code (e.g. 50006 "Cannot send an empty
    /// message").
    pub code: i64,
    /// Human-readable error message.
    pub message: String,
}

impl fmt::Display for DiscordRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}: {}", self.code, self.message)
    }
}
