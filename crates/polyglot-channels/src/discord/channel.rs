//! Channel trait implementation: gateway startup, message lookup, replies.

use super::handler::Handler;
use super::send::{parse_snowflake, truncate};
use super::DiscordChannel;
use async_trait::async_trait;
use polyglot_core::{
    error::PolyglotError,
    message::{OutgoingMessage, ReactionEvent},
    traits::Channel,
};
use serenity::all::{
    ChannelId, Client, CreateAllowedMentions, CreateMessage, GatewayIntents, MessageId,
};
use std::sync::atomic::Ordering;
use tokio::sync::mpsc;
use tracing::{error, info};

fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT
}

#[async_trait]
impl Channel for DiscordChannel {
    fn name(&self) -> &str {
        "discord"
    }

    async fn start(&self) -> Result<mpsc::Receiver<ReactionEvent>, PolyglotError> {
        if self.config.bot_token.trim().is_empty() {
            return Err(PolyglotError::Config(
                "discord.bot_token is empty (or set DISCORD_BOT_TOKEN)".into(),
            ));
        }

        let (tx, rx) = mpsc::channel(64);
        let handler = Handler {
            tx,
            ready: self.ready.clone(),
        };

        let mut client = Client::builder(&self.config.bot_token, intents())
            .event_handler(handler)
            .await
            .map_err(|e| PolyglotError::Channel(format!("discord client setup failed: {e}")))?;

        *self.shard_manager.lock().await = Some(client.shard_manager.clone());

        info!("Discord channel connecting to gateway...");
        let ready = self.ready.clone();
        tokio::spawn(async move {
            if let Err(e) = client.start().await {
                error!("discord gateway stopped: {e}");
            }
            ready.store(false, Ordering::SeqCst);
        });

        Ok(rx)
    }

    async fn fetch_text(&self, event: &ReactionEvent) -> Result<Option<String>, PolyglotError> {
        let channel_id = ChannelId::new(parse_snowflake(&event.reply_target, "channel")?);
        let message_id = MessageId::new(parse_snowflake(&event.message_id, "message")?);

        let message = self
            .http
            .get_message(channel_id, message_id)
            .await
            .map_err(|e| PolyglotError::Channel(format!("discord fetch message failed: {e}")))?;

        if message.content.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(message.content))
        }
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), PolyglotError> {
        let channel_id = ChannelId::new(parse_snowflake(&message.reply_target, "channel")?);

        let mut builder = CreateMessage::new()
            .content(truncate(&message.text))
            .allowed_mentions(CreateAllowedMentions::new().replied_user(false));
        if let Some(reply_to) = &message.reply_to {
            let message_id = MessageId::new(parse_snowflake(reply_to, "message")?);
            builder = builder.reference_message((channel_id, message_id));
        }

        channel_id
            .send_message(&*self.http, builder)
            .await
            .map_err(|e| PolyglotError::Channel(format!("discord send failed: {e}")))?;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    async fn stop(&self) -> Result<(), PolyglotError> {
        if let Some(manager) = self.shard_manager.lock().await.take() {
            info!("Discord channel shutting down");
            manager.shutdown_all().await;
        }
        self.ready.store(false, Ordering::SeqCst);
        Ok(())
    }
}
