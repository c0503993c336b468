//! Gateway event handler: turns flag reactions into [`ReactionEvent`]s.

use async_trait::async_trait;
use chrono::Utc;
use polyglot_core::message::ReactionEvent;
use serenity::all::{ActivityData, Context, EventHandler, Reaction, ReactionType, Ready};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub(super) struct Handler {
    pub(super) tx: mpsc::Sender<ReactionEvent>,
    pub(super) ready: Arc<AtomicBool>,
}

/// The unicode symbol of a reaction. Custom server emoji have none.
pub(super) fn unicode_trigger(emoji: &ReactionType) -> Option<&str> {
    match emoji {
        ReactionType::Unicode(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Who reacted, as far as the gateway payload tells us.
pub(super) struct Actor {
    pub id: u64,
    pub name: Option<String>,
    pub is_bot: bool,
}

pub(super) fn build_event(
    trigger: &str,
    actor: Actor,
    channel_id: u64,
    message_id: u64,
) -> ReactionEvent {
    ReactionEvent {
        id: Uuid::new_v4(),
        channel: "discord".to_string(),
        actor_id: actor.id.to_string(),
        actor_name: actor.name,
        actor_is_bot: actor.is_bot,
        trigger: trigger.to_string(),
        message_id: message_id.to_string(),
        reply_target: channel_id.to_string(),
        timestamp: Utc::now(),
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        let Some(trigger) = unicode_trigger(&reaction.emoji) else {
            return;
        };

        // Guild reactions carry the member; DM reactions need a lookup.
        let actor = match &reaction.member {
            Some(member) => Actor {
                id: member.user.id.get(),
                name: Some(member.user.name.clone()),
                is_bot: member.user.bot,
            },
            None => match reaction.user(&ctx).await {
                Ok(user) => Actor {
                    id: user.id.get(),
                    name: Some(user.name),
                    is_bot: user.bot,
                },
                Err(e) => {
                    warn!("discord: could not resolve reacting user: {e}");
                    return;
                }
            },
        };

        let event = build_event(
            trigger,
            actor,
            reaction.channel_id.get(),
            reaction.message_id.get(),
        );
        debug!(
            "discord: reaction {} on message {} by {}",
            event.trigger, event.message_id, event.actor_id
        );

        if self.tx.send(event).await.is_err() {
            warn!("discord: event receiver dropped, reaction ignored");
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        ctx.set_activity(Some(ActivityData::watching("flag reactions for translations")));
        self.ready.store(true, Ordering::SeqCst);
        info!(
            "Discord connected as {} ({} guilds)",
            ready.user.name,
            ready.guilds.len()
        );
    }
}
