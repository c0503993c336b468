//! Discord channel via serenity.
//!
//! Listens for reaction-add events over the gateway and talks REST for
//! everything else (fetching the reacted-to message, sending replies).
//! Docs: <https://discord.com/developers/docs/topics/gateway-events#message-reaction-add>

mod channel;
mod handler;
pub(crate) mod send;

#[cfg(test)]
mod tests;

use polyglot_core::config::DiscordConfig;
use serenity::all::ShardManager;
use serenity::http::Http;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Discord channel: gateway for reactions, REST for replies.
pub struct DiscordChannel {
    config: DiscordConfig,
    http: Arc<Http>,
    /// Set once the gateway reports `READY`, cleared on shutdown.
    ready: Arc<AtomicBool>,
    /// Handle for shutting the gateway shards down — set after `start()`.
    shard_manager: Mutex<Option<Arc<ShardManager>>>,
}

impl DiscordChannel {
    /// Create a new Discord channel from config.
    pub fn new(config: DiscordConfig) -> Self {
        let http = Arc::new(Http::new(&config.bot_token));
        Self {
            config,
            http,
            ready: Arc::new(AtomicBool::new(false)),
            shard_manager: Mutex::new(None),
        }
    }
}
