//! Tests for the Discord payload and rejection schemas.

use super::{
    DiscordAuthor, DiscordEmbed, DiscordEmbedField, DiscordFooter, DiscordPayload,
    DiscordRejection,
};
use serde_json::json;

mod serialization {
    use super::*;

    #[test]
    fn empty_payload_serializes_to_empty_object() {
        let payload = DiscordPayload::new();

        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }

    #[test]
    fn unset_fields_are_omitted_not_null() {
        let payload = DiscordPayload::new().with_content("hi");
        let json = serde_json::to_string(&payload).unwrap();

        assert_eq!(json, r#"{"content":"hi"}"#);
        assert!(!json.contains("null"));
    }

    #[test]
    fn explicitly_empty_content_is_kept() {
        let payload = DiscordPayload::new().with_content("");

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"content":""}"#
        );
    }

    #[test]
    fn username_and_avatar_overrides_serialize() {
        let payload = DiscordPayload::new()
            .with_content("hi")
            .with_username("Battery Bot")
            .with_avatar_url("https://example.com/icon.png");

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "content": "hi",
                "username": "Battery Bot",
                "avatar_url": "https://example.com/icon.png",
            })
        );
    }

    #[test]
    fn full_embed_serializes_all_blocks() {
        let payload = DiscordPayload::new().with_embed(
            DiscordEmbed::new()
                .with_author(
                    DiscordAuthor::new()
                        .with_name("Aria's MacBook")
                        .with_icon_url("https://example.com/a.png"),
                )
                .with_footer(DiscordFooter::new().with_text("sent at 09:00"))
                .with_title("Battery status")
                .with_description("20% remaining")
                .with_color(0x00FF_7F50)
                .with_field(
                    DiscordEmbedField::new()
                        .with_name("State")
                        .with_value("discharging")
                        .with_inline(true),
                ),
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "embeds": [{
                    "author": {
                        "name": "Aria's MacBook",
                        "icon_url": "https://example.com/a.png",
                    },
                    "footer": { "text": "sent at 09:00" },
                    "title": "Battery status",
                    "description": "20% remaining",
                    "color": 0x00FF_7F50,
                    "fields": [{
                        "name": "State",
                        "value": "discharging",
                        "inline": true,
                    }],
                }],
            })
        );
    }

    #[test]
    fn color_serializes_as_decimal_number() {
        let embed = DiscordEmbed::new().with_color(16_711_680);

        assert_eq!(
            serde_json::to_string(&embed).unwrap(),
            r#"{"color":16711680}"#
        );
    }

    #[test]
    fn inline_flag_serializes_as_bool() {
        let field = DiscordEmbedField::new().with_inline(false);

        assert_eq!(
            serde_json::to_string(&field).unwrap(),
            r#"{"inline":false}"#
        );
    }
}

mod builders {
    use super::*;

    #[test]
    fn defaults_leave_everything_unset() {
        let payload = DiscordPayload::default();

        assert!(payload.content.is_none());
        assert!(payload.username.is_none());
        assert!(payload.avatar_url.is_none());
        assert!(payload.embeds.is_none());
    }

    #[test]
    fn with_embed_appends() {
        let payload = DiscordPayload::new()
            .with_embed(DiscordEmbed::new().with_title("first"))
            .with_embed(DiscordEmbed::new().with_title("second"));

        let embeds = payload.embeds.unwrap();
        assert_eq!(embeds.len(), 2);
        assert_eq!(embeds[0].title.as_deref(), Some("first"));
        assert_eq!(embeds[1].title.as_deref(), Some("second"));
    }

    #[test]
    fn with_field_appends() {
        let embed = DiscordEmbed::new()
            .with_field(DiscordEmbedField::new().with_name("a"))
            .with_field(DiscordEmbedField::new().with_name("b"));

        assert_eq!(embed.fields.unwrap().len(), 2);
    }

    #[test]
    fn builder_chains_correctly() {
        let payload = DiscordPayload::new()
            .with_content("c")
            .with_username("u");

        assert_eq!(payload.content.as_deref(), Some("c"));
        assert_eq!(payload.username.as_deref(), Some("u"));
    }

    #[test]
    fn payload_is_cloneable_and_comparable() {
        let payload = DiscordPayload::new().with_content("c");

        assert_eq!(payload.clone(), payload);
    }
}

mod rejection {
    use super::*;

    #[test]
    fn decodes_code_and_message() {
        let rejection: DiscordRejection =
            serde_json::from_str(r#"{"code":50006,"message":"Cannot send an empty message"}"#)
                .unwrap();

        assert_eq!(rejection.code, 50006);
        assert_eq!(rejection.message, "Cannot send an empty message");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let rejection: DiscordRejection =
            serde_json::from_str(r#"{"code":0,"message":"m","errors":{"_misc":[]}}"#).unwrap();

        assert_eq!(rejection.code, 0);
    }

    #[test]
    fn missing_code_fails_to_decode() {
        let result = serde_json::from_str::<DiscordRejection>(r#"{"message":"m"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn missing_message_fails_to_decode() {
        let result = serde_json::from_str::<DiscordRejection>(r#"{"code":0}"#);

        assert!(result.is_err());
    }

    #[test]
    fn display_formats_code_and_message() {
        let rejection = DiscordRejection {
            code: 50006,
            message: "Cannot send an empty message".to_string(),
        };

        assert_eq!(
            rejection.to_string(),
            "code 50006: Cannot send an empty message"
        );
    }
}
