use super::handler::{build_event, unicode_trigger, Actor};
use super::send::{parse_snowflake, truncate, MAX_DISCORD_LEN};
use super::DiscordChannel;
use polyglot_core::config::DiscordConfig;
use polyglot_core::error::PolyglotError;
use polyglot_core::traits::Channel;
use serenity::all::{EmojiId, ReactionType};

#[test]
fn test_unicode_reaction_is_trigger() {
    let emoji = ReactionType::Unicode("🇪🇸".to_string());
    assert_eq!(unicode_trigger(&emoji), Some("🇪🇸"));
}

#[test]
fn test_custom_emoji_is_ignored() {
    let emoji = ReactionType::Custom {
        animated: false,
        id: EmojiId::new(123456789),
        name: Some("pepe".to_string()),
    };
    assert_eq!(unicode_trigger(&emoji), None);
}

#[test]
fn test_build_event_maps_ids() {
    let event = build_event(
        "🇫🇷",
        Actor {
            id: 42,
            name: Some("ana".into()),
            is_bot: false,
        },
        1001,
        2002,
    );
    assert_eq!(event.channel, "discord");
    assert_eq!(event.trigger, "🇫🇷");
    assert_eq!(event.actor_id, "42");
    assert_eq!(event.actor_name.as_deref(), Some("ana"));
    assert!(!event.actor_is_bot);
    assert_eq!(event.reply_target, "1001");
    assert_eq!(event.message_id, "2002");
}

#[test]
fn test_parse_snowflake() {
    assert_eq!(parse_snowflake("1234567890123", "channel").unwrap(), 1234567890123);
    assert!(parse_snowflake("0", "channel").is_err());
    assert!(parse_snowflake("", "message").is_err());
    assert!(parse_snowflake("abc", "message").is_err());
    assert!(parse_snowflake("-5", "message").is_err());
}

#[test]
fn test_truncate_short_text_untouched() {
    assert_eq!(truncate("hola"), "hola");
}

#[test]
fn test_truncate_counts_characters_not_bytes() {
    let text = "é".repeat(MAX_DISCORD_LEN + 50);
    let cut = truncate(&text);
    assert_eq!(cut.chars().count(), MAX_DISCORD_LEN);

    let exact = "a".repeat(MAX_DISCORD_LEN);
    assert_eq!(truncate(&exact).len(), MAX_DISCORD_LEN);
}

#[test]
fn test_not_connected_before_start() {
    let channel = DiscordChannel::new(DiscordConfig::default());
    assert_eq!(channel.name(), "discord");
    assert!(!channel.is_connected());
}

#[tokio::test]
async fn test_start_without_token_is_config_error() {
    let channel = DiscordChannel::new(DiscordConfig::default());
    let err = channel.start().await.unwrap_err();
    assert!(matches!(err, PolyglotError::Config(_)));
}

#[tokio::test]
async fn test_stop_before_start_is_ok() {
    let channel = DiscordChannel::new(DiscordConfig::default());
    assert!(channel.stop().await.is_ok());
}
